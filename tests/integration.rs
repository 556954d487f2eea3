use std::process::Command;

use serde_json::Value;

#[test]
fn emits_render_primitives_as_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_constellate"))
        .args([
            "--frames",
            "240",
            "--pointer-x",
            "0.8",
            "--pointer-y",
            "0.2",
            "--json",
        ])
        .output()
        .expect("Failed to execute constellate");

    assert!(output.status.success(), "constellate exited with error");

    let frame: Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");

    let points = frame["points"].as_array().expect("points array");
    let lines = frame["lines"].as_array().expect("lines array");
    assert!(!points.is_empty(), "default catalog produced no points");
    assert!(!lines.is_empty(), "default catalog produced no lines");

    for point in points {
        let position = point["position"].as_array().expect("position array");
        assert_eq!(position.len(), 3);
        for component in position {
            let value = component.as_f64().expect("numeric coordinate");
            assert!(value.is_finite(), "non-finite coordinate after 240 frames");
        }
        let color = point["color"].as_array().expect("color array");
        assert_eq!(color.len(), 4);
    }

    for line in lines {
        assert_eq!(line["start"].as_array().expect("start").len(), 3);
        assert_eq!(line["end"].as_array().expect("end").len(), 3);
    }
}

#[test]
fn summary_reports_settled_graph_with_centered_pointer() {
    let output = Command::new(env!("CARGO_BIN_EXE_constellate"))
        .args(["--frames", "1000"])
        .output()
        .expect("Failed to execute constellate");

    assert!(output.status.success(), "constellate exited with error");

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert!(stdout.contains("nodes"), "missing node count: {stdout}");
    assert!(stdout.contains("mean speed"), "missing speed line: {stdout}");
}
