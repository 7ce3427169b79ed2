//! Affordability sanitizer.
//!
//! Every scenario handed to the player passes through here first. The pass
//! never fails: whatever the input, the output is a choice list with at
//! least one option the player can afford.

use crate::scenario::Choice;
use crate::stats::{ChoiceEffect, ChoiceKind};

/// Rewrite any choice that would overdraw the wallet, then guarantee the
/// list still has a playable option.
///
/// A choice is unaffordable iff its wallet delta is negative and larger in
/// magnitude than the wallet. Such choices keep their id and kind but become
/// inert: zeroed effect, lock glyph, "too expensive" labeling. If that
/// leaves zero affordable choices, the first slot is replaced outright with
/// a do-nothing rescue choice.
pub fn sanitize_choices(choices: Vec<Choice>, wallet: i64) -> Vec<Choice> {
    let mut affordable = 0usize;

    let mut safe: Vec<Choice> = choices
        .into_iter()
        .map(|c| {
            if c.is_affordable(wallet) {
                affordable += 1;
                c
            } else {
                lock_choice(c)
            }
        })
        .collect();

    if affordable == 0 {
        let rescue = rescue_choice();
        if safe.is_empty() {
            safe.push(rescue);
        } else {
            safe[0] = rescue;
        }
    }

    safe
}

fn lock_choice(choice: Choice) -> Choice {
    let needed = choice.effect.wallet_change.abs();
    Choice {
        text: "Too Expensive".to_string(),
        subtext: format!("Need {needed}"),
        emoji: "🔒".to_string(),
        effect: ChoiceEffect::NONE,
        outcome_message: "You didn't have enough money.".to_string(),
        ..choice
    }
}

/// The guaranteed-safe choice used when nothing else is affordable.
fn rescue_choice() -> Choice {
    Choice {
        id: "rescue_opt".to_string(),
        text: "Do Nothing".to_string(),
        subtext: "Save your money".to_string(),
        emoji: "🛑".to_string(),
        kind: ChoiceKind::Saving,
        effect: ChoiceEffect::new(0, 0, -5),
        outcome_message: "You decided not to spend anything.".to_string(),
    }
}
