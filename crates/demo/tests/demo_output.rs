use wizcoin_demo::{DEFAULT_PURSES, DemoConfig, write_reports};
use wizcoin_purse::CoinPurse;

fn render(purses: &[CoinPurse]) -> String {
    let mut buf = Vec::new();
    write_reports(&mut buf, purses).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("report is utf-8")
}

#[test]
fn default_demo_output_is_stable() {
    let expected = "\
CoinPurse(G:2, S:5, K:99)
G: 2 S: 5 K: 99
Total value: 1230
Weight: 613.906 grams

CoinPurse(G:13, S:0, K:0)
G: 13 S: 0 K: 0
Total value: 6409
Weight: 404.339 grams

";
    assert_eq!(render(&DEFAULT_PURSES), expected);
}

#[test]
fn configured_purses_render_in_order() {
    let config = DemoConfig::parse("0,0,0;0,1,0").unwrap();
    let output = render(&config.purses);

    let value_lines: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with("Total value:"))
        .collect();
    assert_eq!(value_lines, vec!["Total value: 0", "Total value: 29"]);
    assert!(output.contains("Weight: 0.0 grams"));
    assert!(output.contains("Weight: 11.34 grams"));
}

#[test]
fn rendering_twice_is_identical() {
    assert_eq!(render(&DEFAULT_PURSES), render(&DEFAULT_PURSES));
}
