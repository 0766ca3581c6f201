/// One `Header` event line, e.g. `header_event_line(&["a", "b"])`.
pub fn header_event_line(fields: &[&str]) -> String {
    let fields: Vec<String> = fields.iter().map(|f| format!("\"{f}\"")).collect();
    format!(r#"{{"$event":"Header","_body":{{"fields":[{}]}}}}"#, fields.join(","))
}

/// One `Record` event line carrying a single integer and a single string.
pub fn record_event_line(integer: i64, text: &str) -> String {
    format!(
        r#"{{"$event":"Record","_body":[{{"$type":"Integer","_value":"{integer}"}},{{"$type":"String","_value":"{text}"}}]}}"#
    )
}

/// One `Summary` event line with a single bookmark and one non-zero counter.
pub fn summary_event_line(bookmark: &str) -> String {
    format!(
        r#"{{"$event":"Summary","_body":{{"bookmarks":["{bookmark}"],"counters":{{"nodesCreated":3}}}}}}"#
    )
}

/// One `Error` event line carrying a single failure.
pub fn error_event_line(code: &str, message: &str) -> String {
    format!(r#"{{"$event":"Error","_body":{{"failures":[{{"code":"{code}","message":"{message}"}}]}}}}"#)
}

/// A complete Header/Record/Summary session, newline-joined and
/// newline-terminated the way a real streaming response body arrives.
pub fn streaming_session() -> String {
    let lines = [
        header_event_line(&["a", "b"]),
        record_event_line(1, "x"),
        summary_event_line("bm1"),
    ];
    let mut body = lines.join("\n");
    body.push('\n');
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo4j_query_types::Event;

    #[test]
    fn each_fixture_line_parses_as_its_named_event() {
        assert!(matches!(
            serde_json::from_str::<Event>(&header_event_line(&["a"])).unwrap(),
            Event::Header(_)
        ));
        assert!(matches!(
            serde_json::from_str::<Event>(&record_event_line(1, "x")).unwrap(),
            Event::Record(_)
        ));
        assert!(matches!(
            serde_json::from_str::<Event>(&summary_event_line("bm1")).unwrap(),
            Event::Summary(_)
        ));
        assert!(matches!(
            serde_json::from_str::<Event>(&error_event_line("Neo.ClientError.X", "boom")).unwrap(),
            Event::Error(_)
        ));
    }

    #[test]
    fn streaming_session_is_three_newline_terminated_lines() {
        let session = streaming_session();
        assert!(session.ends_with('\n'));
        assert_eq!(session.matches('\n').count(), 3);
    }
}
