#![allow(dead_code)]

use chrono::NaiveDate;
use subtrack_core::subscriptions::{BillingCycle, Category, Subscription, SubscriptionBook};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn subscription(
    name: &str,
    price: f64,
    billing_cycle: BillingCycle,
    category: Category,
    next_billing_date: NaiveDate,
) -> Subscription {
    Subscription::new(name, price, billing_cycle, category, next_billing_date)
}

/// The demo data set the app ships with.
pub fn demo_book() -> SubscriptionBook {
    let mut book = SubscriptionBook::new("Pessoal");
    book.add_subscription(
        subscription(
            "Netflix",
            45.90,
            BillingCycle::Monthly,
            Category::Streaming,
            date(2024, 12, 15),
        )
        .with_description("Streaming de filmes e séries")
        .with_logo("🎬"),
    );
    book.add_subscription(
        subscription(
            "Spotify Premium",
            21.90,
            BillingCycle::Monthly,
            Category::Streaming,
            date(2024, 12, 10),
        )
        .with_description("Música sem anúncios")
        .with_logo("🎵"),
    );
    book.add_subscription(
        subscription(
            "Adobe Creative Cloud",
            89.90,
            BillingCycle::Monthly,
            Category::Software,
            date(2024, 12, 20),
        )
        .with_description("Suite de design profissional")
        .with_logo("🎨"),
    );
    book.add_subscription(
        subscription(
            "GitHub Pro",
            24.90,
            BillingCycle::Monthly,
            Category::Saas,
            date(2024, 12, 8),
        )
        .with_description("Repositórios privados ilimitados")
        .with_logo("💻"),
    );
    book.add_subscription(
        subscription(
            "Smart Fit",
            79.90,
            BillingCycle::Monthly,
            Category::Fitness,
            date(2024, 12, 25),
        )
        .with_description("Academia com acesso nacional")
        .with_logo("💪"),
    );
    book
}
