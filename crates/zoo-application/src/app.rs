//! The view state machine.
//!
//! `ZooApp` owns the visitor session and decides which screen is shown:
//! `Login -> ProfileSelection -> Guide`, with "change settings" going back to
//! profile selection and logout going back to login. The screen is derived
//! from the session record, so a restored record lands on the right screen.
//! Every change to the record is written through the repository at once.

use std::sync::Arc;

use strum::Display;
use zoo_core::poi::Catalog;
use zoo_core::user::{Authenticator, UserState, UserStateRepository};
use zoo_core::{AccessibilityProfile, ProfileSet};
use zoo_interaction::{Agent, AssistantSession, PromptBuilder, SendOutcome};

use crate::error::{AppError, Result};
use crate::guide::GuideState;
use crate::profile_selector::ProfileSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Screen {
    Login,
    ProfileSelection,
    Guide,
}

impl Screen {
    pub fn of(user: &UserState) -> Self {
        if !user.is_logged_in {
            Self::Login
        } else if user.profiles.is_empty() {
            Self::ProfileSelection
        } else {
            Self::Guide
        }
    }
}

/// Collaborators injected into [`ZooApp::boot`].
pub struct AppServices {
    pub repository: Arc<dyn UserStateRepository>,
    pub authenticator: Arc<dyn Authenticator>,
    pub catalog: Arc<Catalog>,
    pub agent: Arc<dyn Agent>,
    pub max_context_chars: usize,
    pub guest_only: bool,
}

pub struct ZooApp {
    services: AppServices,
    user: UserState,
    selector: ProfileSelector,
    guide: Option<GuideState>,
    assistant: Option<AssistantSession>,
}

impl ZooApp {
    /// Restores the saved session and mounts the matching screen.
    ///
    /// Guest-only login forcing belongs to the repository; `guest_only` here
    /// only refuses logout.
    pub async fn boot(services: AppServices) -> Self {
        let user = match services.repository.load().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Could not load saved session, starting fresh: {}", e);
                UserState::new()
            }
        };
        let mut app = Self {
            services,
            user,
            selector: ProfileSelector::new(),
            guide: None,
            assistant: None,
        };
        if app.screen() == Screen::Guide {
            app.enter_guide();
        }
        tracing::info!("Booted on {} screen", app.screen());
        app
    }

    pub fn screen(&self) -> Screen {
        Screen::of(&self.user)
    }

    pub fn user(&self) -> &UserState {
        &self.user
    }

    pub fn catalog(&self) -> &Catalog {
        &self.services.catalog
    }

    pub fn is_guest_only(&self) -> bool {
        self.services.guest_only
    }

    pub fn selector(&self) -> &ProfileSelector {
        &self.selector
    }

    /// `Login -> ProfileSelection` on a credential match.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        self.require(Screen::Login)?;
        if let Err(e) = self.services.authenticator.authenticate(username, password) {
            tracing::info!("Login rejected");
            return Err(e.into());
        }

        self.user = UserState::logged_in(username.trim());
        self.selector = ProfileSelector::new();
        self.persist().await;
        Ok(())
    }

    /// Back to `Login`, clearing every session field.
    pub async fn logout(&mut self) -> Result<()> {
        if self.services.guest_only {
            return Err(AppError::GuestOnly);
        }
        if self.screen() == Screen::Login {
            return Ok(());
        }
        self.leave_guide();
        self.user = UserState::new();
        self.selector = ProfileSelector::new();
        self.persist().await;
        Ok(())
    }

    /// Confirms exactly one profile and enters the guide.
    pub async fn quick_select(&mut self, profile: AccessibilityProfile) -> Result<()> {
        self.require(Screen::ProfileSelection)?;
        if profile == AccessibilityProfile::None {
            return Err(AppError::NotSelectable(profile));
        }
        self.selector.cancel();
        self.apply_profiles(ProfileSet::from_profiles([profile])).await;
        Ok(())
    }

    pub fn begin_custom(&mut self) -> Result<()> {
        self.require(Screen::ProfileSelection)?;
        self.selector.begin_custom();
        Ok(())
    }

    pub fn toggle_custom(&mut self, profile: AccessibilityProfile) -> Result<()> {
        self.require(Screen::ProfileSelection)?;
        self.selector.toggle(profile)
    }

    pub fn cancel_custom(&mut self) -> Result<()> {
        self.require(Screen::ProfileSelection)?;
        self.selector.cancel();
        Ok(())
    }

    /// Confirms the custom selection; an empty one is rejected.
    pub async fn confirm_custom(&mut self) -> Result<()> {
        self.require(Screen::ProfileSelection)?;
        let profiles = self.selector.confirm()?;
        self.apply_profiles(profiles).await;
        Ok(())
    }

    /// `Guide -> ProfileSelection`, keeping the login.
    pub async fn change_settings(&mut self) -> Result<()> {
        self.require(Screen::Guide)?;
        self.leave_guide();
        self.user.profiles.clear();
        self.selector = ProfileSelector::new();
        self.persist().await;
        Ok(())
    }

    pub fn guide(&self) -> Option<&GuideState> {
        self.guide.as_ref()
    }

    pub fn guide_mut(&mut self) -> Option<&mut GuideState> {
        self.guide.as_mut()
    }

    pub fn assistant(&self) -> Option<&AssistantSession> {
        self.assistant.as_ref()
    }

    /// Sends one question to the assistant.
    pub async fn ask(&self, text: &str) -> Result<SendOutcome> {
        let assistant = self.active_assistant()?;
        Ok(assistant
            .send(text, &self.user.profiles, &self.services.catalog)
            .await)
    }

    /// Closes the open detail view and asks for a route to its POI.
    pub async fn ask_route(&mut self) -> Result<SendOutcome> {
        let guide = self
            .guide
            .as_mut()
            .ok_or(AppError::WrongScreen {
                expected: Screen::Guide,
                actual: Screen::of(&self.user),
            })?;
        let name = guide
            .selected()
            .map(|poi| poi.name.clone())
            .ok_or(AppError::NoSelection)?;
        guide.close();
        self.ask(&route_question(&name)).await
    }

    fn active_assistant(&self) -> Result<&AssistantSession> {
        self.require(Screen::Guide)?;
        self.assistant.as_ref().ok_or(AppError::WrongScreen {
            expected: Screen::Guide,
            actual: self.screen(),
        })
    }

    fn require(&self, expected: Screen) -> Result<()> {
        let actual = self.screen();
        if actual == expected {
            Ok(())
        } else {
            Err(AppError::WrongScreen { expected, actual })
        }
    }

    async fn apply_profiles(&mut self, profiles: ProfileSet) {
        tracing::debug!("Active profiles: [{}]", profiles.summary());
        self.user.profiles = profiles;
        self.persist().await;
        self.enter_guide();
    }

    fn enter_guide(&mut self) {
        let catalog = Arc::clone(&self.services.catalog);
        self.guide = Some(GuideState::new(catalog, self.user.profiles.clone()));
        self.assistant = Some(AssistantSession::new(
            Arc::clone(&self.services.agent),
            PromptBuilder::new(self.services.max_context_chars),
            &self.user.profiles,
        ));
    }

    fn leave_guide(&mut self) {
        self.guide = None;
        self.assistant = None;
    }

    async fn persist(&self) {
        if let Err(e) = self.services.repository.save(&self.user).await {
            tracing::warn!("Failed to save session: {}", e);
        }
    }
}

/// The question sent by the detail view's route hand-off.
pub fn route_question(poi_name: &str) -> String {
    format!("What is the best accessible route to {poi_name}?")
}
