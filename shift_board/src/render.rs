use use_cases::coordinator::Screen;
use use_cases::shifts::details::ShiftDetails;
use use_cases::shifts::list::{ShiftDisplayable, ViewState};

pub const HELP: &str = "commands: more, refresh, open <n>, back, help, quit";

pub fn screen(screen: &Screen, list: &ViewState) -> String {
    match screen {
        Screen::ShiftList => shift_list(list),
        Screen::ShiftDetails(details) => shift_details(details),
    }
}

pub fn shift_list(state: &ViewState) -> String {
    match state {
        ViewState::Loading => "Loading shifts...\n".to_string(),
        ViewState::Error(message) => {
            format!("Could not load shifts: {message}\ntype `refresh` to try again\n")
        }
        ViewState::Ready(ready) => {
            let mut out = String::from("Available shifts\n");
            if ready.shifts.is_empty() {
                out.push_str("  no shifts in this period\n");
            }
            for (index, shift) in ready.shifts.iter().enumerate() {
                out.push_str(&format!("{:>3}. {}\n", index + 1, row(shift)));
            }
            if ready.is_loading_more {
                out.push_str("  loading more...\n");
            }
            out
        }
    }
}

fn row(shift: &ShiftDisplayable) -> String {
    let mut row = format!(
        "{} ({}) {}",
        shift.time_text, shift.timezone_text, shift.shift_kind
    );
    if shift.is_premium_rate {
        row.push_str(" [premium]");
    }
    if shift.is_covid {
        row.push_str(" [covid]");
    }
    row
}

pub fn shift_details(details: &ShiftDetails) -> String {
    let mut out = format!("{}\n{}\n", details.title_text, details.subtitle_text);
    let fields = [
        ("Normalized time", details.normalized_time_text.as_str()),
        ("Timezone", details.timezone.as_str()),
        ("Kind", details.shift_kind.as_str()),
        ("Within distance (mi)", details.within_distance_text.as_str()),
        ("Facility", details.facility_text.as_str()),
        ("Skill", details.skill_text.as_str()),
        ("Localized specialty", details.localized_specialty_text.as_str()),
        (
            "Premium rate",
            if details.is_premium_rate { "yes" } else { "no" },
        ),
    ];
    for (label, value) in fields {
        out.push_str(&format!("  {label}: {value}\n"));
    }
    out
}
