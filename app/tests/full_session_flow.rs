//! End-to-end flow through the public controller API: register,
//! browse, book a session, chat it down to zero, and check the books.

use rand::SeedableRng;
use rand::rngs::StdRng;

use app::config::AppConfig;
use app::devices::{SimulatedCamera, SimulatedLocation};
use app::models::{BookingStatus, Gender, RegistrationMethod};
use app::registration::face_enrollment::FaceEnrollment;
use app::state::{App, Screen, View};
use common::geo;

fn test_app() -> App {
    let home = geo::geocode("new york").expect("known city");
    App::with_rng(
        AppConfig::instant(),
        SimulatedLocation::Fixed(home),
        StdRng::seed_from_u64(2024),
    )
}

#[tokio::test]
async fn test_full_session_flow() {
    let mut app = test_app();

    // 1. Register a new account through every wizard step
    app.start_registration();
    {
        let wizard = app.wizard_mut().expect("wizard active");
        wizard.select_method(RegistrationMethod::Phone).unwrap();
        wizard.submit_contact("5559876543").await.unwrap();
        wizard.submit_otp("271828").await.unwrap();
        wizard
            .submit_profile("Robin", "#robin_77", 29, Gender::Female)
            .await
            .unwrap();
        wizard.submit_password("Skyline77x", "Skyline77x").unwrap();
        wizard.skip_optional().unwrap();
    }

    let mut enrollment = FaceEnrollment::new(AppConfig::instant(), SimulatedCamera::granted());
    enrollment.start().await.unwrap();
    assert!(enrollment.is_complete());

    app.wizard_mut()
        .expect("wizard active")
        .finish_face_enrollment()
        .unwrap();
    app.complete_registration().await.unwrap();

    assert_eq!(app.view(), View::Feed);
    assert_eq!(app.current_user().unwrap().handle, "#robin_77");

    // 2. Pick a host from discovery
    app.navigate(View::Discover).await;
    let host = match app.screen() {
        Screen::Discover(d) => d.hosts()[0].clone(),
        _ => panic!("discover not active"),
    };

    // 3. Book a 1-minute session and chat through it
    app.open_profile(host.clone()).await.unwrap();
    let booking = app.book_session(1).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Upcoming);
    assert_eq!(app.view(), View::Chat);

    app.send_chat_message("Hi there!").await.unwrap();
    match app.screen_mut() {
        Screen::Chat(chat) => {
            assert!(chat.messages().len() >= 3);
            for _ in 0..60 {
                chat.tick(1);
            }
            assert!(!chat.is_active());
        }
        _ => panic!("chat not active"),
    }

    // 4. The booking shows up first and can be cancelled
    app.navigate(View::Bookings).await;
    match app.screen_mut() {
        Screen::Bookings(bookings) => {
            assert_eq!(bookings.bookings()[0].id, booking.id);
            bookings.cancel(booking.id).unwrap();
        }
        _ => panic!("bookings not active"),
    }

    // 5. Log out and confirm the guard is back
    app.logout();
    assert_eq!(app.view(), View::Login);
    app.navigate(View::Feed).await;
    assert_eq!(app.view(), View::Login);
}
