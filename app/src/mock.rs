//! Mock data generation
//!
//! Everything the screens render is generated here, in-memory, at
//! "mount" time. Generators are pure functions of the supplied RNG so
//! screens can be exercised with a seeded `StdRng`.

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::models::{
    AuthorRef, Booking, BookingStatus, Comment, Conversation, Gender, Message, PaymentMethod,
    Post, Story, User,
};

const FIRST_NAMES: &[&str] = &[
    "Luna", "Aria", "Sofia", "Maya", "Chloe", "Ivy", "Nina", "Zara", "Elena", "Ruby", "Kai",
    "Leo", "Milo", "Ezra", "Jade", "Nova", "Iris", "Wren", "Sage", "Remy",
];

/// Display-cased names for the cities the geocoder knows
const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Miami",
    "Seattle",
    "San Francisco",
    "Boston",
    "Denver",
    "Austin",
];

const INTERESTS: &[&str] = &[
    "music", "travel", "gaming", "cooking", "yoga", "movies", "art", "hiking", "photography",
    "dancing", "books", "coffee",
];

const BIOS: &[&str] = &[
    "Here for good conversations and better coffee.",
    "Part-time dreamer, full-time talker.",
    "Ask me about my travel stories.",
    "Happy to chat about anything under the sun.",
    "Night owl. Playlist curator. Serial optimist.",
];

const CAPTIONS: &[&str] = &[
    "Golden hour never misses",
    "Weekend mood",
    "New city, who dis",
    "Coffee first, questions later",
    "Little things, big joy",
    "Sunsets and second chances",
];

const MESSAGE_SNIPPETS: &[&str] = &[
    "Hey! How's your day going?",
    "That sounds amazing!",
    "I was just thinking about that",
    "Haha, tell me more",
    "Same time tomorrow?",
    "You won't believe what happened today",
];

const REPLY_SNIPPETS: &[&str] = &[
    "Aw, I love that!",
    "Haha that's so true",
    "Tell me everything!",
    "I was literally about to say that",
    "Okay that made my day",
];

const TAGS: &[&str] = &[
    "datenight", "coffee", "sunset", "foodie", "citylife", "weekend", "music", "travel",
];

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or("")
}

fn pick_many(rng: &mut impl Rng, pool: &[&str], count: usize) -> Vec<String> {
    let mut items: Vec<&str> = pool.to_vec();
    items.shuffle(rng);
    items.truncate(count);
    items.into_iter().map(str::to_string).collect()
}

/// Placeholder avatar URL
pub fn avatar_url(rng: &mut impl Rng) -> String {
    format!("https://picsum.photos/seed/face-{}/200/200", rng.gen_range(1..10_000))
}

/// Placeholder photo URL
pub fn photo_url(rng: &mut impl Rng) -> String {
    format!("https://picsum.photos/seed/photo-{}/400/600", rng.gen_range(1..10_000))
}

fn handle_for(name: &str, rng: &mut impl Rng) -> String {
    format!("#{}_{}", name.to_lowercase(), rng.gen_range(10..100))
}

fn author(rng: &mut impl Rng) -> AuthorRef {
    AuthorRef {
        id: Uuid::new_v4(),
        name: pick(rng, FIRST_NAMES).to_string(),
        avatar_url: avatar_url(rng),
    }
}

/// Generate a host profile
pub fn host(rng: &mut impl Rng) -> User {
    let name = pick(rng, FIRST_NAMES);
    let interest_count = rng.gen_range(2..=4);
    User {
        id: Uuid::new_v4(),
        handle: handle_for(name, rng),
        display_name: name.to_string(),
        avatar_url: avatar_url(rng),
        bio: pick(rng, BIOS).to_string(),
        age: rng.gen_range(21..=45),
        location: pick(rng, CITIES).to_string(),
        gender: *[Gender::Female, Gender::Male, Gender::NonBinary]
            .choose(rng)
            .unwrap_or(&Gender::Female),
        rating: (rng.gen_range(3.5_f32..=5.0) * 10.0).round() / 10.0,
        hourly_rate: rng.gen_range(2..=15) * 10,
        is_host: true,
        is_online: rng.gen_bool(0.6),
        followed_by_me: false,
        interests: pick_many(rng, INTERESTS, interest_count),
        photos: (0..rng.gen_range(3..=6)).map(|_| photo_url(rng)).collect(),
        followers: rng.gen_range(100..50_000),
        following: rng.gen_range(10..500),
        created_at: Utc::now() - Duration::days(rng.gen_range(30..900)),
    }
}

/// Generate `count` host profiles
pub fn hosts(rng: &mut impl Rng, count: usize) -> Vec<User> {
    (0..count).map(|_| host(rng)).collect()
}

/// Generate the signed-in user for a mock login
pub fn current_user(rng: &mut impl Rng, email: &str) -> User {
    let name = email
        .split('@')
        .next()
        .filter(|n| !n.is_empty())
        .unwrap_or("you")
        .to_string();
    User {
        id: Uuid::new_v4(),
        handle: handle_for(&name, rng),
        display_name: name,
        avatar_url: avatar_url(rng),
        bio: String::new(),
        age: rng.gen_range(21..=40),
        location: pick(rng, CITIES).to_string(),
        gender: Gender::NonBinary,
        rating: 0.0,
        hourly_rate: 0,
        is_host: false,
        is_online: true,
        followed_by_me: false,
        interests: Vec::new(),
        photos: Vec::new(),
        followers: 0,
        following: 0,
        created_at: Utc::now(),
    }
}

/// Generate a feed post
pub fn post(rng: &mut impl Rng) -> Post {
    let tag_count = rng.gen_range(1..=3);
    Post {
        id: Uuid::new_v4(),
        author: author(rng),
        caption: pick(rng, CAPTIONS).to_string(),
        media_urls: (0..rng.gen_range(1..=3)).map(|_| photo_url(rng)).collect(),
        tags: pick_many(rng, TAGS, tag_count),
        likes: rng.gen_range(0..5_000),
        comments: rng.gen_range(0..300),
        shares: rng.gen_range(0..120),
        saves: rng.gen_range(0..400),
        liked_by_me: false,
        saved_by_me: false,
        created_at: Utc::now() - Duration::minutes(rng.gen_range(1..10_000)),
    }
}

/// Generate `count` feed posts
pub fn posts(rng: &mut impl Rng, count: usize) -> Vec<Post> {
    (0..count).map(|_| post(rng)).collect()
}

/// Generate a story for the feed rail
pub fn story(rng: &mut impl Rng) -> Story {
    Story {
        id: Uuid::new_v4(),
        author: author(rng),
        media_url: photo_url(rng),
        viewed: false,
        expires_at: Utc::now() + Duration::hours(rng.gen_range(1..24)),
    }
}

/// Generate a comment on the given post
pub fn comment(rng: &mut impl Rng, post_id: Uuid) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        post_id,
        author: author(rng),
        text: pick(rng, MESSAGE_SNIPPETS).to_string(),
        likes: rng.gen_range(0..50),
        created_at: Utc::now() - Duration::minutes(rng.gen_range(1..500)),
    }
}

/// Generate an inbox conversation
pub fn conversation(rng: &mut impl Rng) -> Conversation {
    Conversation {
        id: Uuid::new_v4(),
        peer: author(rng),
        peer_online: rng.gen_bool(0.5),
        last_message: pick(rng, MESSAGE_SNIPPETS).to_string(),
        last_message_at: Utc::now() - Duration::minutes(rng.gen_range(1..3_000)),
        unread: if rng.gen_bool(0.4) {
            rng.gen_range(1..8)
        } else {
            0
        },
    }
}

/// Generate a message inside a conversation
pub fn message(rng: &mut impl Rng, conversation_id: Uuid, sender_id: Uuid) -> Message {
    Message {
        id: Uuid::new_v4(),
        conversation_id,
        sender_id,
        content: pick(rng, MESSAGE_SNIPPETS).to_string(),
        sent_at: Utc::now() - Duration::minutes(rng.gen_range(0..200)),
        read: rng.gen_bool(0.7),
    }
}

/// A canned host reply for the chat auto-responder
pub fn canned_reply(rng: &mut impl Rng) -> String {
    pick(rng, REPLY_SNIPPETS).to_string()
}

/// Generate a booking with a random status
pub fn booking(rng: &mut impl Rng) -> Booking {
    let hourly_rate = rng.gen_range(2..=15) * 10;
    let duration_mins = *[30_u32, 60, 90].choose(rng).unwrap_or(&60);
    let status = *[
        BookingStatus::Upcoming,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ]
    .choose(rng)
    .unwrap_or(&BookingStatus::Upcoming);

    let date = match status {
        BookingStatus::Upcoming => Utc::now() + Duration::hours(rng.gen_range(2..200)),
        _ => Utc::now() - Duration::hours(rng.gen_range(2..200)),
    };

    Booking {
        id: Uuid::new_v4(),
        host: author(rng),
        hourly_rate,
        date,
        duration_mins,
        amount_usd: hourly_rate * duration_mins / 60,
        status,
        payment_method: *[PaymentMethod::Card, PaymentMethod::Wallet, PaymentMethod::Paypal]
            .choose(rng)
            .unwrap_or(&PaymentMethod::Card),
        created_at: Utc::now() - Duration::days(rng.gen_range(0..30)),
    }
}

/// Trending tag names, most popular first
pub fn trending_tags() -> Vec<&'static str> {
    TAGS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generators_are_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        let host_a = host(&mut a);
        let host_b = host(&mut b);
        assert_eq!(host_a.display_name, host_b.display_name);
        assert_eq!(host_a.hourly_rate, host_b.hourly_rate);
        assert_eq!(host_a.location, host_b.location);
    }

    #[test]
    fn test_host_fields_are_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let h = host(&mut rng);
            assert!(h.is_host);
            assert!((3.5..=5.0).contains(&h.rating));
            assert!(h.hourly_rate >= 20 && h.hourly_rate <= 150);
            assert!((21..=45).contains(&h.age));
            assert!(common::geo::geocode(&h.location).is_some());
            assert!(h.handle.starts_with('#'));
        }
    }

    #[test]
    fn test_booking_dates_follow_status() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let b = booking(&mut rng);
            match b.status {
                BookingStatus::Upcoming => assert!(b.date > Utc::now()),
                _ => assert!(b.date < Utc::now()),
            }
            assert_eq!(b.amount_usd, b.hourly_rate * b.duration_mins / 60);
        }
    }

    #[test]
    fn test_current_user_is_not_a_host() {
        let mut rng = StdRng::seed_from_u64(9);
        let user = current_user(&mut rng, "sam@example.com");
        assert!(!user.is_host);
        assert_eq!(user.hourly_rate, 0);
        assert_eq!(user.display_name, "sam");
    }
}
