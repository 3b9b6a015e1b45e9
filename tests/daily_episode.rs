//! Daily-dated release parsing against real-world release names.

use chrono::{Days, NaiveDate};
use episodic_parser::{config::ParserConfig, ParsedTitle, Parser};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 6, 1).unwrap()
}

fn fixed_parser() -> Parser {
    Parser::new(ParserConfig::builder().reference_date(reference()).build())
}

fn parse(input: &str) -> Option<ParsedTitle> {
    fixed_parser().parse(input)
}

#[test]
fn parses_daily_release_names() {
    let cases: &[(&str, &str, (i32, u32, u32))] = &[
        (
            "Conan 2011 04 18 Emma Roberts HDTV XviD BFF",
            "conan",
            (2011, 4, 18),
        ),
        (
            "The Tonight Show With Jay Leno 2011 04 15 1080i HDTV DD5 1 MPEG2 TrueHD",
            "thetonightshowwithjayleno",
            (2011, 4, 15),
        ),
        (
            "The.Daily.Show.2010.10.11.Johnny.Knoxville.iTouch-MW",
            "thedailyshow",
            (2010, 10, 11),
        ),
        (
            "The Daily Show - 2011-04-12 - Gov. Deval Patrick",
            "thedailyshow",
            (2011, 4, 12),
        ),
        ("2011.01.10 - Denis Leary - HD TV.mkv", "", (2011, 1, 10)),
        ("2011.03.13 - Denis Leary - HD TV.mkv", "", (2011, 3, 13)),
        (
            "The Tonight Show with Jay Leno - 2011-06-16 - Larry David, \"Bachelorette\" Ashley Hebert, Pitbull with Lil Jon",
            "thetonightshowwithjayleno",
            (2011, 6, 16),
        ),
        ("2020.NZ.2011.12.02.PDTV.XviD-C4TV", "2020nz", (2011, 12, 2)),
        ("2020.NZ.2012.16.02.PDTV.XviD-C4TV", "2020nz", (2012, 2, 16)),
        ("2020.NZ.2012.13.02.PDTV.XviD-C4TV", "2020nz", (2012, 2, 13)),
    ];

    for (input, title, (year, month, day)) in cases {
        let parsed = parse(input).unwrap_or_else(|| panic!("failed to parse {input:?}"));
        assert_eq!(parsed.series_title, *title, "title for {input:?}");
        assert_eq!(
            parsed.air_date,
            NaiveDate::from_ymd_opt(*year, *month, *day),
            "air date for {input:?}"
        );
        assert!(parsed.is_daily(), "{input:?} should be daily");
        assert!(parsed.episode_numbers.is_empty());
        assert!(parsed.absolute_episode_numbers.is_empty());
        assert!(parsed.season_number.is_none());
        assert!(!parsed.full_season);
    }
}

#[test]
fn air_date_string_is_zero_padded() {
    let parsed = parse("Conan 2011 04 08 Some Guest HDTV XviD BFF").unwrap();
    assert_eq!(parsed.air_date_string().as_deref(), Some("2011-04-08"));
}

#[test]
fn rejects_ancient_air_dates() {
    assert!(parse("Conan 1950 10 14 Some Guest HDTV XviD BFF").is_none());
}

#[test]
fn rejects_air_dates_after_the_reference_date() {
    let tomorrow = reference() + Days::new(1);
    let next_week = reference() + Days::new(7);

    for future in [tomorrow, next_week] {
        let input = format!("Conan {} Some Guest HDTV XviD BFF", future.format("%Y %m %d"));
        assert!(parse(&input).is_none(), "{input:?} should be rejected");
    }
}

#[test]
fn the_reference_date_itself_is_admissible() {
    let input = format!(
        "Conan {} Some Guest HDTV XviD BFF",
        reference().format("%Y %m %d")
    );
    let parsed = parse(&input).unwrap();
    assert_eq!(parsed.air_date, Some(reference()));
}

#[test]
fn rejects_impossible_calendar_dates() {
    assert!(parse("The.Daily.Show.2011.02.30.Some.Guest.HDTV").is_none());
}

#[test]
fn a_bad_date_never_falls_back_to_another_convention() {
    // The triple matches structurally, so the parse fails outright instead
    // of reinterpreting the digits under a looser convention.
    assert!(parse("Conan - 1950 10 14 Some Guest HDTV").is_none());
}

#[test]
fn a_lone_year_is_not_a_daily_date() {
    assert!(parse("The.Matrix.1999.1080p.BluRay.x264-GROUP").is_none());
}
