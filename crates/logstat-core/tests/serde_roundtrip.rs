use logstat_core::{Convention, ErrorInfo, ExtractedSeries, LogstatError, SeriesKind};

#[test]
fn series_round_trip_json() {
    let series = ExtractedSeries {
        iterations: vec![12, 40, 7],
        nodes: vec![100, 250],
    };
    let json = serde_json::to_string_pretty(&series).expect("serialize");
    let decoded: ExtractedSeries = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, series);
}

#[test]
fn error_serializes_with_family_tag() {
    let err =
        LogstatError::Io(ErrorInfo::new("not-found", "missing").with_context("path", "a.txt"));
    let value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(value["family"], "Io");
    assert_eq!(value["detail"]["code"], "not-found");
    assert_eq!(value["detail"]["context"]["path"], "a.txt");
    assert!(value["detail"].get("hint").is_none());
}

#[test]
fn convention_names_and_aliases() {
    let parsed: Convention = serde_json::from_str("\"marker-offset\"").expect("canonical");
    assert_eq!(parsed, Convention::MarkerOffset);
    let alias: Convention = serde_json::from_str("\"bidir\"").expect("alias");
    assert_eq!(alias, Convention::MarkerOffset);
    let simple: Convention = serde_json::from_str("\"simple\"").expect("alias");
    assert_eq!(simple, Convention::SimplePrefix);
    assert_eq!(
        serde_json::to_string(&Convention::SimplePrefix).expect("serialize"),
        "\"simple-prefix\""
    );
}

#[test]
fn convention_from_str() {
    assert_eq!("file".parse::<Convention>().unwrap(), Convention::SimplePrefix);
    assert_eq!("marker-offset".parse::<Convention>().unwrap(), Convention::MarkerOffset);
    let err = "breadth".parse::<Convention>().unwrap_err();
    assert_eq!(err.code(), "unknown-convention");
}

#[test]
fn series_kind_headers() {
    let headers: Vec<_> = SeriesKind::ALL.iter().map(SeriesKind::header).collect();
    assert_eq!(headers, ["iters", "nodes"]);
}

#[test]
fn series_push_and_emptiness() {
    let mut series = ExtractedSeries::default();
    assert!(series.is_empty());
    series.push(SeriesKind::Nodes, 12);
    assert!(!series.is_empty());
    assert_eq!(series.get(SeriesKind::Nodes), &[12]);
    assert!(series.get(SeriesKind::Iterations).is_empty());
}
