//! Route map: logical page names to URL paths, and URL paths back to the
//! screen the shell should mount.

use std::fmt;

/// The six pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Recommendations,
    Weather,
    Forum,
    Resources,
    Profile,
}

impl Page {
    pub const ALL: &'static [Self] = &[
        Self::Dashboard,
        Self::Recommendations,
        Self::Weather,
        Self::Forum,
        Self::Resources,
        Self::Profile,
    ];

    /// Logical name used with [`resolve`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Recommendations => "Recommendations",
            Self::Weather => "Weather",
            Self::Forum => "Forum",
            Self::Resources => "Resources",
            Self::Profile => "Profile",
        }
    }

    /// Canonical path. The forum lives under `/community`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Recommendations => "/recommendations",
            Self::Weather => "/weather",
            Self::Forum => "/community",
            Self::Resources => "/resources",
            Self::Profile => "/profile",
        }
    }

    /// Exact, case-sensitive lookup by logical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.path() == path)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the URL for a page.
///
/// Known page names map to their canonical path; any other name falls back
/// to `/` + the lowercased name. Non-empty `params` are appended as a
/// percent-encoded query string in the order given.
pub fn resolve<I, K, V>(page_name: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = Page::from_name(page_name).map_or_else(
        || format!("/{}", page_name.to_lowercase()),
        |page| page.path().to_string(),
    );

    let query = params
        .into_iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                urlencoding::encode(k.as_ref()),
                urlencoding::encode(v.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// What the shell mounts for a URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Page(Page),
    /// `/community?id=<post_id>`.
    PostDetail { post_id: String },
    /// Unknown path; the shell mounts the target instead.
    Redirect(Page),
}

impl Route {
    /// Match a path (optionally with a query string) against the route
    /// table. Unknown paths redirect to the dashboard.
    #[must_use]
    pub fn from_path(raw: &str) -> Self {
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        if path == "/" {
            return Self::Landing;
        }

        match Page::from_path(path) {
            Some(Page::Forum) => query_param(query, "id")
                .filter(|id| !id.is_empty())
                .map_or(Self::Page(Page::Forum), |post_id| Self::PostDetail { post_id }),
            Some(page) => Self::Page(page),
            None => {
                tracing::debug!(path, "unknown path, redirecting to dashboard");
                Self::Redirect(Page::Dashboard)
            }
        }
    }

    /// The path the browser would show after routing.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Page(page) | Self::Redirect(page) => page.path().to_string(),
            Self::PostDetail { post_id } => resolve(Page::Forum.name(), [("id", post_id)]),
        }
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            urlencoding::decode(v).map_or_else(|_| v.to_string(), std::borrow::Cow::into_owned)
        })
}
