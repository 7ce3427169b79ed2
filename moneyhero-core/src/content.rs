//! Hand-authored scenario content.
//!
//! The opening scenario, the two scripted early levels, the low-funds earn
//! scenario, and the fallback library all live here so the rest of the
//! engine deals only in `Scenario` values.

use crate::scenario::{Choice, Scenario};
use crate::stats::{ChoiceEffect, ChoiceKind};

fn choice(
    id: &str,
    text: &str,
    subtext: &str,
    emoji: &str,
    kind: ChoiceKind,
    effect: ChoiceEffect,
    outcome_message: &str,
) -> Choice {
    Choice {
        id: id.to_string(),
        text: text.to_string(),
        subtext: subtext.to_string(),
        emoji: emoji.to_string(),
        kind,
        effect,
        outcome_message: outcome_message.to_string(),
    }
}

/// The scenario every new session opens with.
pub fn initial_scenario() -> Scenario {
    Scenario {
        id: 1,
        title: "The Candy Shop Trap".to_string(),
        category: "Spending".to_string(),
        image_keyword: "candy shop interior colorful sweets".to_string(),
        image_alt: "A colorful candy shop filled with sweets".to_string(),
        description: "You have 500 QAR pocket money. You are in a super cute candy store! \
                      There is a box of yummy chocolates for 50 QAR. But... you were saving \
                      for a new Gaming PC (1500 QAR). What do you do?"
            .to_string(),
        choices: vec![
            choice(
                "c1",
                "Buy the Chocolates!",
                "YUMMY NOW, GONE LATER.",
                "🍫",
                ChoiceKind::Spending,
                ChoiceEffect::new(-50, 0, 20),
                "It was delicious! But that is 50 QAR less for your Gaming PC.",
            ),
            choice(
                "c2",
                "Save for the PC",
                "PATIENCE PAYS OFF.",
                "🖥️",
                ChoiceKind::Saving,
                ChoiceEffect::new(0, 10, -5),
                "Smart move! You kept your 500 QAR intact. Closer to the goal!",
            ),
        ],
    }
}

/// Scripted level 1 -> 2: recurring vs. one-time cost.
pub fn subscription_trap() -> Scenario {
    Scenario {
        id: 2,
        title: "The Subscription Trap".to_string(),
        category: "Spending".to_string(),
        image_keyword: "video game pass subscription".to_string(),
        image_alt: "A game screen showing a monthly pass".to_string(),
        description: "You want a 'Game Pass'. It costs 15 QAR every month. Or you can buy a \
                      different game once for 60 QAR. Monthly payments add up!"
            .to_string(),
        choices: vec![
            choice(
                "l2a",
                "Subscribe (15/mo)",
                "Looks cheap...",
                "📅",
                ChoiceKind::Spending,
                ChoiceEffect::new(-15, 0, 20),
                "You paid 15. Next month you pay again... and again.",
            ),
            choice(
                "l2b",
                "Buy Once (60)",
                "Expensive but done.",
                "💿",
                ChoiceKind::Investing,
                ChoiceEffect::new(-60, 20, 20),
                "Ouch! 60 QAR gone. But you own it forever. No more payments!",
            ),
        ],
    }
}

/// Scripted level 2 -> 3: splitting a cash windfall.
pub fn eidiyah_surprise() -> Scenario {
    Scenario {
        id: 3,
        title: "Eidiyah Surprise".to_string(),
        category: "Eidiyah Windfall".to_string(),
        image_keyword: "gift box money celebration".to_string(),
        image_alt: "A gift box with money".to_string(),
        description: "It's Eid! You got 200 QAR from your relatives. That's a lot of money! \
                      What is your plan?"
            .to_string(),
        choices: vec![
            choice(
                "l3a",
                "Spend it All!",
                "Buy that big toy.",
                "🎁",
                ChoiceKind::Spending,
                ChoiceEffect::new(-200, 0, 50),
                "It was fun, but now the money is all gone.",
            ),
            choice(
                "l3b",
                "Save & Donate",
                "Save 150, Give 50.",
                "🕌",
                ChoiceKind::Charity,
                ChoiceEffect::new(-50, 20, 20),
                "You feel great helping others and still have savings!",
            ),
        ],
    }
}

/// The low-funds scenario: one guaranteed income choice, one neutral choice.
pub fn garage_helper(level: u32) -> Scenario {
    Scenario {
        id: level,
        title: "Garage Helper".to_string(),
        category: "Honest Work".to_string(),
        image_keyword: "cleaning garage broom".to_string(),
        image_alt: "Cleaning a garage".to_string(),
        description: "Your neighbor needs help organizing their garage. They will pay you \
                      for your time."
            .to_string(),
        choices: vec![
            choice(
                "bk1",
                "Help Out",
                "Earn 20 QAR",
                "🧹",
                ChoiceKind::Earning,
                ChoiceEffect::new(20, 5, -5),
                "Hard work pays off! +20 QAR.",
            ),
            choice(
                "bk2",
                "Relax",
                "Earn nothing",
                "🛏️",
                ChoiceKind::Saving,
                ChoiceEffect::new(0, 0, 5),
                "You rested, but your wallet is empty.",
            ),
        ],
    }
}

/// The offline library the fallback picker draws from. Each entry covers a
/// distinct lesson: trade/profit, sale resistance, charity.
pub fn fallback_library() -> Vec<Scenario> {
    vec![
        Scenario {
            id: 0,
            title: "The Lemonade Stand".to_string(),
            category: "Trade & Profit".to_string(),
            image_keyword: "lemonade stand summer drink".to_string(),
            image_alt: "A bright yellow lemonade stand".to_string(),
            description: "It's a hot day! You can buy lemons and sugar to sell lemonade, or \
                          just buy a cold drink for yourself."
                .to_string(),
            choices: vec![
                choice(
                    "f1",
                    "Start Stand (Cost 10)",
                    "Invest to earn more.",
                    "🍋",
                    ChoiceKind::Investing,
                    ChoiceEffect::new(-10, 10, 5),
                    "You sold lots of lemonade and made 30 QAR profit!",
                ),
                choice(
                    "f2",
                    "Buy a Slushie",
                    "Cool down instantly.",
                    "🥤",
                    ChoiceKind::Spending,
                    ChoiceEffect::new(-5, 0, 10),
                    "Brain freeze! Yummy but money is gone.",
                ),
            ],
        },
        Scenario {
            id: 0,
            title: "The Toy Sale".to_string(),
            category: "Smart Saving".to_string(),
            image_keyword: "toy store sale price tag".to_string(),
            image_alt: "A toy store with a big red sale sign".to_string(),
            description: "There is a massive sale on toys! 50% off. You don't really need a \
                          new toy, but it's cheap."
                .to_string(),
            choices: vec![
                choice(
                    "f3",
                    "Buy Toy (Cost 20)",
                    "It is on sale!",
                    "🤖",
                    ChoiceKind::Spending,
                    ChoiceEffect::new(-20, 0, 15),
                    "New toy! But was it a need or a want?",
                ),
                choice(
                    "f4",
                    "Walk Away",
                    "Save your money.",
                    "🤐",
                    ChoiceKind::Saving,
                    ChoiceEffect::new(0, 5, -5),
                    "You resisted the urge! Your savings are safe.",
                ),
            ],
        },
        Scenario {
            id: 0,
            title: "Charity Drive".to_string(),
            category: "Charity (Sadaqah)".to_string(),
            image_keyword: "donation box helping hands".to_string(),
            image_alt: "A charity donation box".to_string(),
            description: "The school is collecting money for people who need food. You have \
                          some pocket money."
                .to_string(),
            choices: vec![
                choice(
                    "f5",
                    "Donate 10 QAR",
                    "Help others.",
                    "🤝",
                    ChoiceKind::Charity,
                    ChoiceEffect::new(-10, 15, 20),
                    "You feel warm inside knowing you helped someone.",
                ),
                choice(
                    "f6",
                    "Keep Money",
                    "Maybe next time.",
                    "😐",
                    ChoiceKind::Saving,
                    ChoiceEffect::NONE,
                    "You kept your money.",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_ids() {
        assert_eq!(initial_scenario().id, 1);
        assert_eq!(subscription_trap().id, 2);
        assert_eq!(eidiyah_surprise().id, 3);
    }

    #[test]
    fn test_garage_helper_has_income() {
        let scenario = garage_helper(7);
        assert_eq!(scenario.id, 7);
        assert!(scenario
            .choices
            .iter()
            .any(|c| c.effect.wallet_change > 0));
    }

    #[test]
    fn test_library_choice_ids_unique() {
        for scenario in fallback_library() {
            let mut ids: Vec<_> = scenario.choices.iter().map(|c| c.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), scenario.choices.len());
        }
    }

    #[test]
    fn test_library_playable_at_starting_wallet() {
        let wallet = crate::stats::PlayerStats::starting().wallet;
        for scenario in fallback_library() {
            assert!(scenario.has_affordable_choice(wallet));
        }
    }
}
