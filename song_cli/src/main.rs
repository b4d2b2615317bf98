use clap::Parser;
use song::Song;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, clap::Parser)]
enum Command {
    /// Walk through the sample songs and their comparisons
    Demo {
        #[arg(long)]
        json: bool,
    },
    /// Compare two songs by artist then title, ignoring case
    Compare {
        #[arg(long)]
        artist_a: Option<String>,
        #[arg(long)]
        title_a: Option<String>,
        #[arg(long)]
        artist_b: Option<String>,
        #[arg(long)]
        title_b: Option<String>,
    },
}

fn main() {
    {
        use tracing_subscriber::prelude::*;

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .init()
    }

    match Command::parse() {
        Command::Demo { json } => demo(json),
        Command::Compare {
            artist_a,
            title_a,
            artist_b,
            title_b,
        } => compare(
            Song::from_options(artist_a, title_a, None),
            Song::from_options(artist_b, title_b, None),
        ),
    }
}

fn sample_songs() -> [Song; 3] {
    [
        Song::new(
            "Professor B",
            "Small Steps",
            "Write your programs in small steps\n\
             small steps, small steps\n\
             Write your programs in small steps\n\
             Test and debug every step of the way.\n",
        ),
        Song::new(
            "Brian Dill",
            "Ode to Bobby B",
            "Professor Bobby B., can't you see,\n\
             sometimes your data structures mystify me,\n\
             the biggest algorithm pro since Donald Knuth,\n\
             here he is, he's Robert Boothe!\n",
        ),
        Song::new(
            "Professor B",
            "Debugger Love",
            "I didn't used to like her\n\
             I stuck with what I knew\n\
             She was waiting there to help me,\n\
             but I always thought print would do\n\n\
             Debugger love .........\n\
             Now I'm so in love with you\n",
        ),
    ]
}

fn sample_comparisons(s1: &Song, s2: &Song, s3: &Song) -> [(&'static str, i32); 6] {
    [
        ("Song1 vs Song2", s1.compare_to(Some(s2))),
        ("Song2 vs Song1", s2.compare_to(Some(s1))),
        ("Song1 vs Song3", s1.compare_to(Some(s3))),
        ("Song3 vs Song1", s3.compare_to(Some(s1))),
        ("Song1 vs Song1", s1.compare_to(Some(s1))),
        ("Song1 vs nothing", s1.compare_to(None)),
    ]
}

#[instrument(level = "trace")]
fn demo(json: bool) {
    let [s1, s2, s3] = sample_songs();

    println!("testing artist: {}", s1.artist());
    println!("testing title: {}", s1.title());
    println!("testing lyrics:\n{}", s1.lyrics());

    println!("testing display:\n");
    println!("Song 1: {s1}");
    println!("Song 2: {s2}");
    println!("Song 3: {s3}");

    println!("testing compare_to:");
    for (label, result) in sample_comparisons(&s1, &s2, &s3) {
        println!("{label} = {result}");
    }

    let catalog = catalog::Catalog::from_songs([s1, s2, s3]);
    println!("sorted:");
    for song in &catalog {
        println!("  {song}");
    }
    debug!(n_songs = catalog.len(), "sorted samples");

    if json {
        match serde_json::to_string_pretty(catalog.songs()) {
            Ok(rendered) => println!("{rendered}"),
            Err(error) => warn!(%error, "failed to render songs as json"),
        }
    }
}

#[instrument(level = "trace")]
fn compare(a: Song, b: Song) {
    let result = a.compare_to(Some(&b));
    info!(%a, %b, result, "compared songs");

    println!("{a} vs {b} = {result} ({:?})", a.natural_cmp(&b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_comparison_results() {
        let [s1, s2, s3] = sample_songs();
        let results = sample_comparisons(&s1, &s2, &s3);

        let expected = [
            ("Song1 vs Song2", 'p' as i32 - 'b' as i32),
            ("Song2 vs Song1", 'b' as i32 - 'p' as i32),
            ("Song1 vs Song3", 's' as i32 - 'd' as i32),
            ("Song3 vs Song1", 'd' as i32 - 's' as i32),
            ("Song1 vs Song1", 0),
            ("Song1 vs nothing", -1),
        ];
        assert_eq!(results, expected);
    }

    #[test]
    fn sample_display_forms() {
        let rendered = sample_songs().map(|song| song.to_string());
        assert_eq!(
            rendered,
            [
                r#"Professor B, "Small Steps""#,
                r#"Brian Dill, "Ode to Bobby B""#,
                r#"Professor B, "Debugger Love""#,
            ]
        );
    }

    #[test]
    fn command_line_parses() {
        let command = Command::try_parse_from([
            "song_cli",
            "compare",
            "--artist-a",
            "Professor B",
            "--title-b",
            "Debugger Love",
        ])
        .unwrap();

        match command {
            Command::Compare {
                artist_a,
                title_a,
                artist_b,
                title_b,
            } => {
                assert_eq!(artist_a.as_deref(), Some("Professor B"));
                assert_eq!(title_a, None);
                assert_eq!(artist_b, None);
                assert_eq!(title_b.as_deref(), Some("Debugger Love"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
