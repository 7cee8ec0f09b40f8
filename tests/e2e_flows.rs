mod common;

use common::{lines, TestEnv};

#[test]
fn interactive_run_parks_after_first_space_fits() {
    let env = TestEnv::new();

    let stdin = lines(&[
        "4.5", "1.8", "P", "F", // vehicle setup
        "3", "6.0", // one space offered is enough
        "0.4", "0.4", "0.4",
    ]);
    let out = env.run_text(&["run"], &stdin);

    assert!(out.contains("AUTONOMOUS PARKING ASSISTANT"));
    assert!(out.contains("Required space: 5.50 meters"));
    assert!(out.contains("Space found! Space 1"));
    assert!(!out.contains("Enter size of space 2"));
    assert!(out.contains("Mode: FORWARD | Type: PARALLEL"));
    assert!(out.contains("Perfectly Parked"));
    assert!(out.contains("=== Session Summary ==="));
    assert!(out.contains("Parking completed successfully!"));
    assert!(out.contains("Thank you for using Autonomous Parking Assistant!"));
}

#[test]
fn interactive_run_reprompts_bad_menu_choices_and_numbers() {
    let env = TestEnv::new();

    let stdin = lines(&[
        "-4", "4.5", "0", "1.8", "x", "t", "q", "r", "2", "1.0", "2.5", "0.6", "0.9", "1.0",
        "0.4", "0.4", "0.4",
    ]);
    let out = env.run_text(&["run"], &stdin);

    assert!(out.contains("Invalid input. Please enter a positive number."));
    assert!(out.contains("Invalid choice. Please enter P or T."));
    assert!(out.contains("Invalid choice. Please enter F or R."));
    assert!(out.contains("Required space: 2.30 meters"));
    assert!(out.contains("Space 1 (1.00 m) is too small"));
    assert!(out.contains("Space found! Space 2"));
    assert!(out.contains("Mode: REVERSE | Type: PERPENDICULAR"));
    assert!(out.contains("Steer RIGHT"));
    assert!(out.contains("Move BACKWARD"));
    assert!(out.contains("Parking completed successfully!"));
}

#[test]
fn run_without_admission_skips_guidance() {
    let env = TestEnv::new();

    let out = env.run_text(
        &["run", "--length", "4.5", "--width", "1.8", "--parking", "parallel"],
        &lines(&["F", "2", "3.0", "5.4"]),
    );

    assert!(out.contains("No suitable parking space found."));
    assert!(out.contains("No suitable parking space available. Exiting..."));
    assert!(!out.contains("Parking Assistant Active"));
}

#[test]
fn json_run_records_retry_then_collision() {
    let env = TestEnv::new();

    let stdin = lines(&[
        "4.0", "5.0", "6.0", // third space fits
        "0.2", "0.2", "0.2", // everything close: back out
        "0.6", "0.9", "0.7", // safe
        "0.05", "0.5", "0.5", // collision
    ]);
    let report = env.run_json(
        &[
            "run",
            "--length",
            "4.5",
            "--width",
            "1.8",
            "--parking",
            "parallel",
            "--mode",
            "reverse",
            "--count",
            "3",
        ],
        &stdin,
    );

    assert_eq!(report["ok"], true);
    let data = &report["data"];
    assert_eq!(data["scan"]["required"], 5.5);
    assert_eq!(data["scan"]["outcome"]["status"], "admitted");
    assert_eq!(data["scan"]["outcome"]["index"], 3);

    let session = &data["session"];
    assert_eq!(session["outcome"], "collision_stopped");
    let turns = session["turns"].as_array().expect("turns array");
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[0]["index"], 1);
    assert_eq!(turns[0]["tag"]["opposite_movement"]["mode"], "reverse");
    assert_eq!(turns[0]["note"], "Sensors close: move FORWARD");
    assert_eq!(turns[1]["tag"]["verdict"]["kind"], "safe");
    assert_eq!(turns[2]["tag"]["verdict"]["kind"], "collision");
    assert!(turns[2]["note"]
        .as_str()
        .unwrap_or("")
        .starts_with("COLLISION!"));
    assert_eq!(session["message"], "Emergency stop activated!");
}

#[test]
fn json_run_with_negative_count_reports_invalid_count() {
    let env = TestEnv::new();

    let report = env.run_json(
        &[
            "run",
            "--length",
            "4.5",
            "--width",
            "1.8",
            "--parking",
            "perpendicular",
            "--mode",
            "forward",
            "--count",
            "-1",
        ],
        "",
    );

    assert_eq!(report["data"]["scan"]["outcome"]["status"], "no_space");
    assert_eq!(report["data"]["scan"]["outcome"]["reason"], "invalid_count");
    assert!(report["data"]["session"].is_null());
}

#[test]
fn guide_session_ends_as_abandoned_when_input_stops() {
    let env = TestEnv::new();

    let summary = env.run_json(&["guide"], &lines(&["1.0", "2.0", "1.0"]));

    assert_eq!(summary["data"]["outcome"], "abandoned");
    assert_eq!(summary["data"]["turns"][0]["note"], "SAFE");
}

#[test]
fn guide_reprompts_undecodable_line_and_still_parks() {
    let env = TestEnv::new();

    let summary = env.run_json(&["guide"], b"\xff\xfe\n0.4\n0.4\n0.4\n");

    assert_eq!(summary["ok"], true);
    assert_eq!(summary["data"]["outcome"], "completed");
    assert_eq!(summary["data"]["turns"].as_array().map(Vec::len), Some(1));
}

#[test]
fn guide_retry_then_park_matches_history() {
    let env = TestEnv::new();

    let summary = env.run_json(
        &["guide", "--mode", "forward"],
        &lines(&["0.2", "0.2", "0.2", "0.4", "0.4", "0.4"]),
    );

    let turns = summary["data"]["turns"].as_array().expect("turns");
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0]["note"], "Sensors close: move BACKWARD");
    assert_eq!(turns[1]["tag"]["verdict"]["kind"], "perfectly_parked");
    assert_eq!(summary["data"]["outcome"], "completed");
}

#[test]
fn scan_with_zero_count_needs_no_input() {
    let env = TestEnv::new();

    let report = env.run_json(
        &[
            "scan", "--parking", "parallel", "--length", "4.5", "--width", "1.8", "--count", "0",
        ],
        "",
    );

    assert_eq!(report["data"]["outcome"]["status"], "no_space");
    assert_eq!(report["data"]["outcome"]["reason"], "none_available");
}

#[test]
fn scan_running_out_of_input_reports_input_closed() {
    let env = TestEnv::new();

    let err = env.run_json_failure(
        &[
            "scan", "--parking", "parallel", "--length", "4.5", "--width", "1.8", "--count", "2",
        ],
        &lines(&["1.0"]),
    );

    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "INPUT_CLOSED");
}

#[test]
fn classify_reports_sides_and_alert() {
    let env = TestEnv::new();

    let report = env.run_json(
        &["classify", "--left", "0.2", "--center", "0.6", "--right", "0.25"],
        "",
    );

    assert_eq!(report["data"]["verdict"]["kind"], "too_close");
    assert_eq!(report["data"]["verdict"]["sides"][0], "left");
    assert_eq!(report["data"]["verdict"]["sides"][1], "right");
    assert_eq!(report["data"]["note"], "TOO CLOSE (Left+Right)! Adjust carefully");
    assert_eq!(report["data"]["alert"], "double");
}

#[test]
fn config_file_changes_clearance() {
    let env = TestEnv::new();
    env.write_config("[clearance]\nparallel_margin = 2.0\n");

    let report = env.run_json(
        &["space", "--parking", "parallel", "--length", "4.5", "--width", "1.8"],
        "",
    );
    assert_eq!(report["data"]["required"], 6.5);

    let cfg = env.run_json(&["config"], "");
    assert_eq!(cfg["data"]["clearance"]["parallel_margin"], 2.0);
    assert_eq!(cfg["data"]["thresholds"]["too_close"], 0.3);
}

#[test]
fn invalid_config_is_reported_with_code() {
    let env = TestEnv::new();
    env.write_config("[thresholds]\ncollision = 0.4\n");

    let err = env.run_json_failure(
        &["classify", "--left", "0.4", "--center", "0.4", "--right", "0.4"],
        "",
    );

    assert_eq!(err["error"]["code"], "CONFIG_INVALID");
    let msg = err["error"]["message"].as_str().unwrap_or("");
    assert!(msg.contains("thresholds must satisfy"));
}
