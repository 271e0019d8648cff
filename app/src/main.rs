use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use std::time::Duration;

use app::config::AppConfig;
use app::devices::{SimulatedCamera, SimulatedLocation};
use app::models::{Gender, RegistrationMethod};
use app::registration::face_enrollment::FaceEnrollment;
use app::state::{App, Screen, View};

/// Scripted demo session: registers an account, browses every screen,
/// books a session, and chats through part of it.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting Amity client demo");

    let config = AppConfig::from_env()?;
    let hometown = common::geo::geocode("new york").expect("city table includes new york");
    let mut app = App::new(config.clone(), SimulatedLocation::Fixed(hometown));

    // Walk the registration wizard end to end
    app.start_registration();
    {
        let wizard = app.wizard_mut().expect("wizard is active");
        wizard
            .select_method(RegistrationMethod::Phone)
            .map_err(anyhow::Error::msg)?;
        wizard
            .submit_contact("5551234567")
            .await
            .map_err(anyhow::Error::msg)?;
        info!(
            cooldown_secs = wizard.resend_cooldown_remaining(),
            "Verification code sent"
        );
        wizard.submit_otp("493817").await.map_err(anyhow::Error::msg)?;
        wizard
            .submit_profile("Sam", "#sam_2049", 27, Gender::NonBinary)
            .await
            .map_err(anyhow::Error::msg)?;
        wizard
            .submit_password("Sunrise9x", "Sunrise9x")
            .map_err(anyhow::Error::msg)?;
        wizard
            .submit_optional(
                "Coffee person. Ask me about vinyl.",
                vec!["coffee".to_string(), "music".to_string()],
                Vec::new(),
            )
            .map_err(anyhow::Error::msg)?;
    }

    // Face enrollment sub-flow against the simulated camera
    let mut enrollment = FaceEnrollment::new(config.clone(), SimulatedCamera::granted());
    enrollment.start().await.map_err(anyhow::Error::msg)?;
    info!(frames = enrollment.frames().len(), "Face scan captured");

    let wizard = app.wizard_mut().expect("wizard is active");
    wizard.finish_face_enrollment().map_err(anyhow::Error::msg)?;
    app.complete_registration().await.map_err(anyhow::Error::msg)?;

    // Browse the feed
    let me = app.current_user().expect("signed in").clone();
    if let Screen::Feed(feed) = app.screen_mut() {
        info!(
            posts = feed.posts().len(),
            stories = feed.stories().len(),
            "Feed loaded"
        );
        if let Some(id) = feed.posts().first().map(|p| p.id) {
            feed.toggle_like(id);
            feed.add_comment(id, &me, "Love this!");
        }
        if let Some(id) = feed.stories().first().map(|s| s.id) {
            feed.mark_story_viewed(id);
        }
    }

    // Discover hosts within range of home
    app.navigate(View::Discover).await;
    let pick = if let Screen::Discover(discover) = app.screen_mut() {
        discover.filters.min_rating = Some(4.0);
        discover.filters.max_distance_km = Some(1_500.0);
        let matches = discover.filtered();
        info!(hits = matches.len(), "Hosts within range");
        // Random mock data can leave the filters empty-handed; the
        // demo then just takes the top of the unfiltered grid
        matches
            .first()
            .map(|h| (*h).clone())
            .or_else(|| discover.hosts().first().cloned())
    } else {
        None
    };

    // Search by city
    app.navigate(View::Search).await;
    if let Screen::Search(search) = app.screen_mut() {
        search.search_city("Los Angeles");
        info!(hits = search.results().len(), "City search ranked by distance");
    }

    // Check what's trending
    app.navigate(View::Trending).await;
    if let Screen::Trending(trending) = app.screen_mut() {
        if let Some(tag) = trending.tags().first().map(|t| t.name.clone()) {
            trending.select_tag(&tag);
            info!(tag = %tag, posts = trending.visible_posts().len(), "Top trending tag");
        }
    }

    // Book a session with the discovered host and chat through it
    let host = pick.ok_or_else(|| anyhow::anyhow!("discover returned no hosts"))?;
    app.open_profile(host).await.map_err(anyhow::Error::msg)?;
    if let Screen::Profile(profile) = app.screen_mut() {
        profile.next_photo();
        profile.toggle_follow();
    }

    let booking = app
        .book_session(config.chat_session_mins)
        .await
        .map_err(anyhow::Error::msg)?;
    let receipt = serde_json::to_string(&booking)?;
    info!(booking = %receipt, "Session booked");

    app.send_chat_message("Hey! Excited for this.")
        .await
        .map_err(anyhow::Error::msg)?;
    app.send_chat_message("What should we talk about first?")
        .await
        .map_err(anyhow::Error::msg)?;

    // Let the session countdown tick a few times
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;
    for _ in 0..3 {
        ticker.tick().await;
        if let Screen::Chat(chat) = app.screen_mut() {
            chat.tick(1);
        }
    }
    if let Screen::Chat(chat) = app.screen() {
        info!(
            remaining_secs = chat.remaining_secs(),
            messages = chat.messages().len(),
            "Chat session in progress"
        );
    }

    // Inbox
    app.navigate(View::Messages).await;
    if let Screen::Messages(messages) = app.screen_mut() {
        info!(unread = messages.total_unread(), "Inbox loaded");
        if let Some(id) = messages.conversations().first().map(|c| c.id) {
            messages.open(id);
        }
    }

    // Bookings: the fresh booking is on top; cancel it
    app.navigate(View::Bookings).await;
    if let Screen::Bookings(bookings) = app.screen_mut() {
        bookings.cancel(booking.id).map_err(anyhow::Error::msg)?;
        info!(total = bookings.bookings().len(), "Booking cancelled");
    }

    // Settings and help
    app.navigate(View::Settings).await;
    app.update_profile("Sam R.", "Coffee person. Ask me about vinyl.")
        .map_err(anyhow::Error::msg)?;
    if let Screen::Settings(settings) = app.screen_mut() {
        settings.notifications.sms = true;
        settings.privacy.show_distance = false;
    }

    app.navigate(View::HelpSupport).await;
    if let Screen::HelpSupport(help) = app.screen_mut() {
        help.toggle_faq(0);
        help.submit_ticket("Feedback", "Loving the app so far!")
            .await
            .map_err(anyhow::Error::msg)?;
    }

    app.navigate(View::Wishlist).await;
    if let Screen::Wishlist(wishlist) = app.screen_mut() {
        if let Some(id) = wishlist.hosts().first().map(|h| h.id) {
            wishlist.remove(id);
        }
        info!(saved = wishlist.hosts().len(), "Wishlist trimmed");
    }

    app.logout();
    info!("Demo session finished");

    Ok(())
}
