use watchdeck_core::{classify, Countdown, UnknownKind, Update, WireUpdate};

fn decode(raw: &str) -> WireUpdate {
    serde_json::from_str(raw).expect("valid update json")
}

#[test]
fn decodes_full_video_update() {
    let wire = decode(
        r#"{
            "type": "Video",
            "status": "In Progress",
            "details": {
                "video_file": "cam1.mp4",
                "progress": "25%",
                "stage": "Uploading"
            }
        }"#,
    );

    assert_eq!(wire.kind, "Video");
    assert_eq!(wire.status.as_deref(), Some("In Progress"));
    let details = wire.details.expect("details present");
    assert_eq!(details.video_file.as_deref(), Some("cam1.mp4"));
    assert_eq!(details.progress.as_deref(), Some("25%"));
}

#[test]
fn decodes_program_countdown_as_number_or_text() {
    let wire = decode(r#"{"type":"Program","status":"Active","details":{"countdown":90}}"#);
    let details = wire.details.expect("details present");
    assert_eq!(details.countdown, Some(Countdown::Seconds(90)));

    let wire = decode(r#"{"type":"Program","status":"Active","details":{"countdown":"90s"}}"#);
    let details = wire.details.expect("details present");
    assert_eq!(details.countdown, Some(Countdown::Text("90s".to_string())));
}

#[test]
fn ignores_unrecognized_json_fields() {
    let wire = decode(r#"{"type":"Feed","message":"hi","source":"box","extra":42}"#);
    assert_eq!(wire.message.as_deref(), Some("hi"));
}

#[test]
fn rejects_frames_without_a_type_tag() {
    let result = serde_json::from_str::<WireUpdate>(r#"{"message":"no tag"}"#);
    assert!(result.is_err());
}

#[test]
fn classify_matches_tags_case_sensitively() {
    let wire = decode(r#"{"type":"video","details":{"video_file":"cam1.mp4"}}"#);
    assert_eq!(classify(wire), Err(UnknownKind("video".to_string())));
}

#[test]
fn classify_reports_unknown_tags() {
    let wire = decode(r#"{"type":"Heartbeat"}"#);
    assert_eq!(classify(wire), Err(UnknownKind("Heartbeat".to_string())));
}

#[test]
fn classify_routes_each_known_tag() {
    assert!(matches!(
        classify(decode(r#"{"type":"Feed","message":"m"}"#)),
        Ok(Update::Feed { .. })
    ));
    assert!(matches!(
        classify(decode(r#"{"type":"Temp","message":"m"}"#)),
        Ok(Update::Temp { .. })
    ));
    assert!(matches!(
        classify(decode(r#"{"type":"Video"}"#)),
        Ok(Update::Video { .. })
    ));
    assert!(matches!(
        classify(decode(r#"{"type":"WorkOrder","message":"m"}"#)),
        Ok(Update::WorkOrder { .. })
    ));
    assert!(matches!(
        classify(decode(r#"{"type":"Program","status":"Active"}"#)),
        Ok(Update::Program { .. })
    ));
}

#[test]
fn classify_lifts_countdown_out_of_details() {
    let wire = decode(r#"{"type":"Program","status":"Active","details":{"countdown":30}}"#);
    let Ok(Update::Program { countdown, .. }) = classify(wire) else {
        panic!("expected a program update");
    };
    assert_eq!(countdown, Some(Countdown::Seconds(30)));
}
