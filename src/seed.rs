use rust_decimal_macros::dec;

use crate::currency::format_inr;
use crate::feed::FeedEntry;
use crate::notify::NotificationEntry;

/// Built-in activity entries shown when the backend cannot be reached.
pub fn demo_feed() -> Vec<FeedEntry> {
    let rows = [
        (1, "Asha", dec!(1250), "Won"),
        (2, "Ravi", dec!(500), "Deposited"),
        (3, "Meena", dec!(196), "Won"),
        (4, "Karthik", dec!(2000), "Withdrew"),
        (5, "Priya", dec!(880), "Won"),
        (6, "Sunil", dec!(150), "Deposited"),
        (7, "Divya", dec!(3920), "Won"),
        (8, "Arjun", dec!(700), "Withdrew"),
    ];

    rows.iter()
        .map(|&(id, name, amount, action)| FeedEntry {
            id,
            display_name: name.to_string(),
            amount: format_inr(amount),
            avatar_url: format!("https://cdn.example/avatars/{id}.png"),
            status_label: "Successful".to_string(),
            action_label: action.to_string(),
        })
        .collect()
}

/// Built-in notification cards.
///
/// The duplicate id mirrors the shipped sample data; dismissing id 2 removes
/// both cards.
pub fn demo_notifications() -> Vec<NotificationEntry> {
    vec![
        NotificationEntry {
            id: 1,
            title: "Welcome bonus".to_string(),
            timestamp: "2026-02-01T09:30:00Z".to_string(),
            message: "Your ₹50.00 welcome bonus has been credited.".to_string(),
        },
        NotificationEntry {
            id: 2,
            title: "Deposit received".to_string(),
            timestamp: "2026-02-01T10:05:00Z".to_string(),
            message: "₹500.00 added to your wallet.".to_string(),
        },
        NotificationEntry {
            id: 2,
            title: "Deposit received".to_string(),
            timestamp: "2026-02-01T10:05:00Z".to_string(),
            message: "₹500.00 added to your wallet.".to_string(),
        },
        NotificationEntry {
            id: 3,
            title: "Referral joined".to_string(),
            timestamp: "2026-02-02T18:40:00Z".to_string(),
            message: "Meena signed up with your referral code.".to_string(),
        },
    ]
}
