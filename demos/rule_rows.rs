use shopadmin::{RowTemplate, RuleListEditor, StatusToggle, ToggleOutcome, ToggleResolution};

fn main() {
    let template = RowTemplate::new("rules", "Rule #")
        .attribute("ruleName")
        .attribute("baseFee")
        .checkbox("isExpress", "isExpress_");

    let mut editor = RuleListEditor::new(template);
    editor.append();
    editor.append();
    editor.append();
    editor.remove(1).expect("row 1 exists");

    println!("rows after append x3, remove middle:");
    for row in editor.rows() {
        println!("  {}", row.heading);
        for field in &row.fields {
            println!("    name={}", field.name);
        }
        for checkbox in &row.checkboxes {
            println!("    checkbox id={} label-for={}", checkbox.id, checkbox.label_for);
        }
    }

    // the activation switch: optimistic display, revert on rejection
    let mut toggle = StatusToggle::new(true);
    let request = toggle.request(false).expect("no request in flight yet");
    println!("\nposting desired state {}...", request.desired);
    let resolution = toggle
        .resolve(ToggleOutcome::Rejected {
            reason: Some("company has open shipments".to_owned()),
        })
        .expect("request was pending");
    match resolution {
        ToggleResolution::Reverted { notice } => {
            println!("reverted, notice: {notice}");
            println!("control shows active={}", toggle.displayed());
        }
        ToggleResolution::Applied { active } => println!("applied, active={active}"),
    }
}
