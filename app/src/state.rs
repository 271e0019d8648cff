//! Top-level router
//!
//! A view enumeration selects which screen controller is alive. The
//! router holds the signed-in user and the selected host; everything
//! else lives inside the active controller and is discarded when the
//! view changes, which is what keeps screens from ever observing each
//! other's state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::devices::LocationProvider;
use crate::models::{Booking, User};
use crate::registration::{RegistrationStep, RegistrationWizard};
use crate::screens::bookings::BookingsScreen;
use crate::screens::chat::ChatScreen;
use crate::screens::discover::DiscoverScreen;
use crate::screens::feed::FeedScreen;
use crate::screens::help_support::HelpSupportScreen;
use crate::screens::login::LoginScreen;
use crate::screens::messages::MessagesScreen;
use crate::screens::payment::PaymentModal;
use crate::screens::profile::ProfileScreen;
use crate::screens::search::SearchScreen;
use crate::screens::settings::SettingsScreen;
use crate::screens::side_menu::SideMenu;
use crate::screens::trending::TrendingScreen;
use crate::screens::wishlist::WishlistScreen;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Feed,
    Discover,
    Search,
    Trending,
    Profile,
    Chat,
    Messages,
    Bookings,
    Wishlist,
    HelpSupport,
    Settings,
}

/// The active screen controller
#[derive(Debug)]
pub enum Screen {
    None,
    Login(LoginScreen),
    Register(RegistrationWizard),
    Feed(FeedScreen),
    Discover(DiscoverScreen),
    Search(SearchScreen),
    Trending(TrendingScreen),
    Profile(ProfileScreen),
    Chat(ChatScreen),
    Messages(MessagesScreen),
    Bookings(BookingsScreen),
    Wishlist(WishlistScreen),
    HelpSupport(HelpSupportScreen),
    Settings(SettingsScreen),
}

/// Application root
pub struct App {
    config: AppConfig,
    rng: StdRng,
    location: Box<dyn LocationProvider>,
    view: View,
    screen: Screen,
    side_menu: SideMenu,
    current_user: Option<User>,
    selected_host: Option<User>,
    session_bookings: Vec<Booking>,
}

impl App {
    /// Start the app on the login screen
    pub fn new(config: AppConfig, location: impl LocationProvider + 'static) -> Self {
        Self::with_rng(config, location, StdRng::from_entropy())
    }

    /// Start with a caller-supplied RNG, for deterministic runs
    pub fn with_rng(
        config: AppConfig,
        location: impl LocationProvider + 'static,
        rng: StdRng,
    ) -> Self {
        let screen = Screen::Login(LoginScreen::new(config.clone()));
        Self {
            config,
            rng,
            location: Box::new(location),
            view: View::Login,
            screen,
            side_menu: SideMenu::new(),
            current_user: None,
            selected_host: None,
            session_bookings: Vec::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn selected_host(&self) -> Option<&User> {
        self.selected_host.as_ref()
    }

    pub fn side_menu(&self) -> &SideMenu {
        &self.side_menu
    }

    pub fn side_menu_mut(&mut self) -> &mut SideMenu {
        &mut self.side_menu
    }

    /// Bookings created during this session
    pub fn session_bookings(&self) -> &[Booking] {
        &self.session_bookings
    }

    /// The active registration wizard, if one is open
    pub fn wizard_mut(&mut self) -> Option<&mut RegistrationWizard> {
        match &mut self.screen {
            Screen::Register(wizard) => Some(wizard),
            _ => None,
        }
    }

    /// Switch views, constructing the target screen fresh
    ///
    /// The previous controller is dropped, which is the unmount.
    /// Authenticated views fall back to the login screen without a
    /// signed-in user; profile and chat need a selected host and keep
    /// the current view when there is none.
    pub async fn navigate(&mut self, view: View) {
        self.side_menu.close();

        if !matches!(view, View::Login | View::Register) && self.current_user.is_none() {
            warn!(?view, "Navigation without a signed-in user");
            self.view = View::Login;
            self.screen = Screen::Login(LoginScreen::new(self.config.clone()));
            return;
        }

        match view {
            View::Login => {
                self.screen = Screen::Login(LoginScreen::new(self.config.clone()));
            }
            View::Register => {
                self.screen = Screen::Register(RegistrationWizard::new(self.config.clone()));
            }
            View::Feed => {
                let mut screen = FeedScreen::new(self.config.clone());
                screen.load(&mut self.rng).await;
                self.screen = Screen::Feed(screen);
            }
            View::Discover => {
                let mut screen = DiscoverScreen::new(self.config.clone());
                screen.load(&mut self.rng, self.location.as_ref()).await;
                self.screen = Screen::Discover(screen);
            }
            View::Search => {
                let mut screen = SearchScreen::new(self.config.clone());
                screen.load(&mut self.rng).await;
                self.screen = Screen::Search(screen);
            }
            View::Trending => {
                let mut screen = TrendingScreen::new(self.config.clone());
                screen.load(&mut self.rng).await;
                self.screen = Screen::Trending(screen);
            }
            View::Profile | View::Chat => {
                // Reached through open_profile/book_session; a bare
                // navigation without a selection goes nowhere
                warn!(?view, "Navigation requires a selected host");
                return;
            }
            View::Messages => {
                let mut screen = MessagesScreen::new(self.config.clone());
                screen.load(&mut self.rng).await;
                let unread = screen.total_unread();
                self.side_menu.set_badge(View::Messages, unread);
                self.screen = Screen::Messages(screen);
            }
            View::Bookings => {
                let mut screen = BookingsScreen::new(self.config.clone());
                screen.load(&mut self.rng, &self.session_bookings).await;
                self.screen = Screen::Bookings(screen);
            }
            View::Wishlist => {
                let mut screen = WishlistScreen::new(self.config.clone());
                screen.load(&mut self.rng).await;
                self.screen = Screen::Wishlist(screen);
            }
            View::HelpSupport => {
                self.screen = Screen::HelpSupport(HelpSupportScreen::new(self.config.clone()));
            }
            View::Settings => {
                self.screen = Screen::Settings(SettingsScreen::new(self.config.clone()));
            }
        }

        self.view = view;
        info!(?view, "Navigated");
    }

    /// Sign in from the login screen and land on the feed
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), String> {
        let Screen::Login(login) = &mut self.screen else {
            return Err("Login screen is not active".to_string());
        };

        let user = login.sign_in(email, password, &mut self.rng).await?;
        info!(user = %user.display_name, "Signed in");
        self.current_user = Some(user);
        self.navigate(View::Feed).await;
        Ok(())
    }

    /// Open the registration wizard
    pub fn start_registration(&mut self) {
        self.view = View::Register;
        self.screen = Screen::Register(RegistrationWizard::new(self.config.clone()));
        info!("Registration started");
    }

    /// Fold the finished wizard into the signed-in user
    pub async fn complete_registration(&mut self) -> Result<(), String> {
        match &self.screen {
            Screen::Register(wizard) if wizard.step() == RegistrationStep::Success => {}
            Screen::Register(_) => return Err("Registration is not complete".to_string()),
            _ => return Err("Registration is not active".to_string()),
        }

        let Screen::Register(wizard) = std::mem::replace(&mut self.screen, Screen::None) else {
            return Err("Registration is not active".to_string());
        };

        let user = wizard.complete()?;
        info!(user = %user.display_name, handle = %user.handle, "Registration complete");
        self.current_user = Some(user);
        self.navigate(View::Feed).await;
        Ok(())
    }

    /// Open a host's profile
    pub async fn open_profile(&mut self, host: User) -> Result<(), String> {
        if self.current_user.is_none() {
            return Err("Sign in first".to_string());
        }

        self.selected_host = Some(host.clone());
        let mut screen = ProfileScreen::new(self.config.clone(), host);
        screen.load(&mut self.rng).await;
        self.screen = Screen::Profile(screen);
        self.view = View::Profile;
        info!("Profile opened");
        Ok(())
    }

    /// Pay for a session with the selected host and drop into the chat
    pub async fn book_session(&mut self, duration_mins: u32) -> Result<Booking, String> {
        let Some(user) = &self.current_user else {
            return Err("Sign in first".to_string());
        };
        let Some(host) = self.selected_host.clone() else {
            return Err("Select a host first".to_string());
        };
        let viewer_id = user.id;

        let mut modal = PaymentModal::new(self.config.clone(), host.clone(), duration_mins);
        let booking = modal.pay().await?;
        self.session_bookings.push(booking.clone());

        let mut chat = ChatScreen::new(self.config.clone(), &host, viewer_id, duration_mins);
        chat.load(&mut self.rng).await;
        self.screen = Screen::Chat(chat);
        self.view = View::Chat;
        info!(host = %host.display_name, "Session booked, chat opened");

        Ok(booking)
    }

    /// Send a message in the active chat
    pub async fn send_chat_message(&mut self, text: &str) -> Result<(), String> {
        let Screen::Chat(chat) = &mut self.screen else {
            return Err("Chat is not active".to_string());
        };
        chat.send(text, &mut self.rng).await
    }

    /// Apply account edits from the settings screen to the signed-in
    /// user
    pub fn update_profile(&mut self, display_name: &str, bio: &str) -> Result<(), String> {
        let Some(user) = self.current_user.as_mut() else {
            return Err("Sign in first".to_string());
        };
        let Screen::Settings(settings) = &mut self.screen else {
            return Err("Settings is not active".to_string());
        };
        settings.apply_profile(user, display_name, bio)
    }

    /// Clear the session and return to login
    pub fn logout(&mut self) {
        info!("Logged out");
        self.current_user = None;
        self.selected_host = None;
        self.session_bookings.clear();
        self.side_menu.close();
        self.view = View::Login;
        self.screen = Screen::Login(LoginScreen::new(self.config.clone()));
    }
}
