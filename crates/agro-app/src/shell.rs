//! Application shell: turns a URL path into a mounted, loaded screen.

use agro_config::AgroConfig;
use agro_core::responses::RouteResponse;
use serde::Serialize;
use serde_json::{Value, json};

use crate::controllers::{
    DashboardController, ForumController, LoadState, PageController, PostDetailsController,
    ProfileController, RecommendationsController, ResourcesController, StoreHandle,
    WeatherController,
};
use crate::error::AppError;
use crate::routes::{Page, Route};

/// The screen mounted for a route.
pub enum Screen {
    Landing,
    Dashboard(DashboardController),
    Recommendations(RecommendationsController),
    Weather(WeatherController),
    Forum(ForumController),
    PostDetails(PostDetailsController),
    Resources(ResourcesController),
    Profile(ProfileController),
}

impl Screen {
    /// Page name for logs and rendered placeholders.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Dashboard(_) => DashboardController::PAGE,
            Self::Recommendations(_) => RecommendationsController::PAGE,
            Self::Weather(_) => WeatherController::PAGE,
            Self::Forum(_) => ForumController::PAGE,
            Self::PostDetails(_) => PostDetailsController::PAGE,
            Self::Resources(_) => ResourcesController::PAGE,
            Self::Profile(_) => ProfileController::PAGE,
        }
    }

    /// Run the screen's initial load. The landing screen has nothing to load.
    pub async fn load(&mut self) -> bool {
        match self {
            Self::Landing => true,
            Self::Dashboard(c) => c.load().await,
            Self::Recommendations(c) => c.load().await,
            Self::Weather(c) => c.load().await,
            Self::Forum(c) => c.load().await,
            Self::PostDetails(c) => c.load().await,
            Self::Resources(c) => c.load().await,
            Self::Profile(c) => c.load().await,
        }
    }

    /// The screen as JSON: the page view once ready, otherwise the load
    /// state (and the public failure message, if any).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Render` if a view cannot be serialized.
    pub fn render(&self) -> Result<Value, AppError> {
        match self {
            Self::Landing => Ok(serde_json::to_value(landing_links())?),
            Self::Dashboard(c) => render_controller(c, c.view()),
            Self::Recommendations(c) => render_controller(c, c.view()),
            Self::Weather(c) => render_controller(c, c.view()),
            Self::Forum(c) => render_controller(c, c.view()),
            Self::PostDetails(c) => render_controller(c, c.view()),
            Self::Resources(c) => render_controller(c, c.view()),
            Self::Profile(c) => render_controller(c, c.view()),
        }
    }
}

/// Render one controller: its view once ready, otherwise its load state.
///
/// # Errors
///
/// Returns `AppError::Render` if the view cannot be serialized.
pub fn render_controller<C, V>(controller: &C, view: Option<V>) -> Result<Value, AppError>
where
    C: PageController,
    V: Serialize,
{
    match (controller.state(), view) {
        (LoadState::Ready(_), Some(view)) => Ok(serde_json::to_value(view)?),
        (LoadState::Failed { message }, _) => Ok(json!({
            "page": C::PAGE,
            "state": "failed",
            "message": message,
        })),
        (state, _) => Ok(json!({ "page": C::PAGE, "state": state.name() })),
    }
}

/// Navigation links shown on the landing screen.
#[must_use]
pub fn landing_links() -> Vec<RouteResponse> {
    Page::ALL
        .iter()
        .map(|page| RouteResponse {
            page: page.name().to_string(),
            path: page.path().to_string(),
        })
        .collect()
}

/// Owns the store and config; builds screens for routes.
pub struct Shell {
    store: StoreHandle,
    config: AgroConfig,
}

impl Shell {
    #[must_use]
    pub const fn new(store: StoreHandle, config: AgroConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub const fn store(&self) -> &StoreHandle {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &AgroConfig {
        &self.config
    }

    /// Build the controller for a page without loading it.
    #[must_use]
    pub fn page(&self, page: Page) -> Screen {
        let store = self.store.clone();
        match page {
            Page::Dashboard => Screen::Dashboard(DashboardController::new(store)),
            Page::Recommendations => {
                Screen::Recommendations(RecommendationsController::new(store))
            }
            Page::Weather => Screen::Weather(WeatherController::new(
                store,
                self.config.weather.clone(),
                self.config.general.default_state.clone(),
            )),
            Page::Forum => Screen::Forum(ForumController::new(store)),
            Page::Resources => Screen::Resources(ResourcesController::new(store)),
            Page::Profile => Screen::Profile(ProfileController::new(store)),
        }
    }

    /// Build the screen for a route without loading it. Redirects mount
    /// their target.
    #[must_use]
    pub fn mount(&self, route: &Route) -> Screen {
        match route {
            Route::Landing => Screen::Landing,
            Route::Page(page) | Route::Redirect(page) => self.page(*page),
            Route::PostDetail { post_id } => {
                Screen::PostDetails(PostDetailsController::new(self.store.clone(), post_id.clone()))
            }
        }
    }

    /// Route `path`, mount the screen, and run its initial load.
    ///
    /// A failed load is not an error here: the screen is returned in its
    /// `Failed` state and renders the public message.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Route` if `path` does not start with `/`.
    pub async fn open(&self, path: &str) -> Result<(Route, Screen), AppError> {
        if !path.starts_with('/') {
            return Err(AppError::Route(path.to_string()));
        }
        let route = Route::from_path(path);
        tracing::debug!(path, location = %route.location(), "opening route");
        let mut screen = self.mount(&route);
        screen.load().await;
        Ok((route, screen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bundled_store, empty_store};
    use pretty_assertions::assert_eq;

    fn shell() -> Shell {
        Shell::new(bundled_store(), AgroConfig::default())
    }

    #[tokio::test]
    async fn root_opens_landing_with_nav_links() {
        let (route, screen) = shell().open("/").await.unwrap();
        assert_eq!(route, Route::Landing);
        let rendered = screen.render().unwrap();
        assert_eq!(rendered.as_array().unwrap().len(), Page::ALL.len());
        assert_eq!(rendered[3]["path"], "/community");
    }

    #[tokio::test]
    async fn unknown_path_mounts_dashboard() {
        let (route, screen) = shell().open("/nowhere").await.unwrap();
        assert_eq!(route, Route::Redirect(Page::Dashboard));
        assert_eq!(screen.name(), "dashboard");
        let rendered = screen.render().unwrap();
        assert_eq!(rendered["farm"]["farm_name"], "Green Valley Farm");
    }

    #[tokio::test]
    async fn community_with_id_mounts_post_details() {
        let (_, screen) = shell().open("/community?id=pst-c3000001").await.unwrap();
        assert!(matches!(screen, Screen::PostDetails(_)));
        let rendered = screen.render().unwrap();
        assert_eq!(rendered["replies"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_post_renders_failed_state() {
        let (_, screen) = shell().open("/community?id=pst-missing").await.unwrap();
        let rendered = screen.render().unwrap();
        assert_eq!(rendered["state"], "failed");
        assert_eq!(rendered["message"], crate::error::NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn relative_path_is_rejected() {
        let err = shell().open("dashboard").await.err().unwrap();
        assert!(matches!(err, AppError::Route(_)));
    }

    #[tokio::test]
    async fn mounted_but_unloaded_screen_renders_idle() {
        let shell = Shell::new(empty_store(), AgroConfig::default());
        let screen = shell.mount(&Route::Page(Page::Resources));
        let rendered = screen.render().unwrap();
        assert_eq!(rendered["state"], "idle");
    }
}
