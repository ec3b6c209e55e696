use crate::domain::model::{SearchOutcome, Spot};
use crate::utils::error::Result;

pub const EMPTY_MESSAGE: &str = "No available parking spots found";

pub fn render_text(outcome: &SearchOutcome<'_>) -> String {
    let mut out = format!(
        "Parking near {} {} minutes:\n",
        outcome.query.destination, outcome.query.time_budget
    );

    if outcome.spots.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    for spot in &outcome.spots {
        out.push('\n');
        render_spot(&mut out, spot);
    }
    out
}

fn render_spot(out: &mut String, spot: &Spot) {
    let availability = if spot.available {
        "✅ Available"
    } else {
        "❌ Unavailable"
    };
    out.push_str(&format!(
        "{}\n  📍 {}\n  ⏱️ {} minutes away\n  {}\n",
        spot.name, spot.location, spot.driving_time, availability
    ));
    if let Some(price) = &spot.price {
        out.push_str(&format!("  💰 {}\n", price));
    }
}

pub fn render_json(outcome: &SearchOutcome<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
