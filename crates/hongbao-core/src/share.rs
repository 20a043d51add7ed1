use crate::greetings::Greeting;

pub const FALLBACK_SHARE_TITLE: &str = "新年快乐";
pub const FALLBACK_SHARE_TEXT: &str = "祝你新年快乐，万事如意！";

/// What the host page knows about its sharing capabilities.
#[derive(Clone, Copy, Debug)]
pub struct ShareEnv<'a> {
    pub user_agent: &'a str,
    pub url: &'a str,
    pub has_native_share: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(greeting: Option<&Greeting>, url: &str) -> Self {
        match greeting {
            Some(g) => Self {
                title: g.title.to_string(),
                text: g.lines.join("\n"),
                url: url.to_string(),
            },
            None => Self {
                title: FALLBACK_SHARE_TITLE.to_string(),
                text: FALLBACK_SHARE_TEXT.to_string(),
                url: url.to_string(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareRoute {
    Native(SharePayload),
    /// Show the static "use the menu in the top-right corner" overlay.
    Instructions,
}

/// WeChat and QQ in-app browsers expose a share API that does not work.
pub fn is_in_app_browser(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    ua.contains("micromessenger") || ua.contains("qq/")
}

pub fn route(env: &ShareEnv<'_>, greeting: Option<&Greeting>) -> ShareRoute {
    if env.has_native_share && !is_in_app_browser(env.user_agent) && env.url.starts_with("http") {
        ShareRoute::Native(SharePayload::new(greeting, env.url))
    } else {
        ShareRoute::Instructions
    }
}
