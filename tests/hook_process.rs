use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_hook(stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ios-reminder-hook"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn hook");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("hook did not finish")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn swift_edit_with_anti_patterns_gets_message() {
    let payload = json!({
        "tool_name": "Write",
        "tool_input": {
            "file_path": "/app/Sources/FeedView.swift",
            "content": "VStack {\n    ForEach(posts) { PostRow(post: $0) }\n}"
        }
    });
    let output = run_hook(&payload.to_string());

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({
            "decision": "approve",
            "message": "iOS Best Practices:\n- Consider LazyVStack for better performance with ForEach"
        })
    );
}

#[test]
fn wrong_extension_is_plain_approval() {
    let payload = json!({
        "tool_input": {"file_path": "Model.py", "content": "ObservableObject a!b!c!d!e!f!"}
    });
    let output = run_hook(&payload.to_string());

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({"decision": "approve"}));
}

#[test]
fn malformed_input_still_approves_and_succeeds() {
    for stdin in ["", "not json at all", "[1,2,3]", r#"{"tool_input": 7}"#] {
        let output = run_hook(stdin);
        assert!(output.status.success(), "non-zero exit for {:?}", stdin);
        assert_eq!(stdout_json(&output), json!({"decision": "approve"}));
    }
}

#[test]
fn malformed_input_is_logged_to_stderr() {
    let output = run_hook("{broken");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ignoring unreadable hook input"));
}
