use thiserror::Error;
use url::Url;

use crate::project::{Manifest, ViewType};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortError {
    #[error("Cannot determine front-end port from extension")]
    Unresolvable,

    #[error("Invalid viewer URL '{url}' for {view} view: {reason}")]
    InvalidViewerUrl {
        view: ViewType,
        url: String,
        reason: String,
    },
}

/// Resolve the port the front-end must listen on.
///
/// The first view type in [`ViewType::ALL`] order that is declared with a
/// viewer URL decides: its explicit port, else 80 for `http` and 443 for
/// anything else.
pub fn resolve_frontend_port(manifest: &Manifest) -> Result<u16, PortError> {
    let Some((view, viewer_url)) = ViewType::ALL.iter().find_map(|view| {
        manifest
            .views
            .get(*view)
            .filter(|v| !v.viewer_url.is_empty())
            .map(|v| (*view, v.viewer_url.as_str()))
    }) else {
        return Err(PortError::Unresolvable);
    };

    let url = Url::parse(viewer_url).map_err(|e| PortError::InvalidViewerUrl {
        view,
        url: viewer_url.to_string(),
        reason: e.to_string(),
    })?;

    // `Url` drops a written port equal to the scheme default, so check the raw text.
    let port = match url.port_or_known_default() {
        Some(port) if port > 0 && has_written_port(viewer_url) => port,
        _ if url.scheme() == "http" => 80,
        _ => 443,
    };
    tracing::debug!(view = %view, port, "resolved front-end port");
    Ok(port)
}

/// Whether the authority of `raw` spells out a `:port`.
fn has_written_port(raw: &str) -> bool {
    let Some((_, rest)) = raw.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let after_host = match host_port.strip_prefix('[') {
        Some(v6) => v6.split_once(']').map_or("", |(_, tail)| tail),
        None => host_port,
    };
    after_host
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{ExtensionView, ExtensionViews};

    fn view(url: &str) -> Option<ExtensionView> {
        Some(ExtensionView {
            viewer_url: url.to_string(),
            ..Default::default()
        })
    }

    fn manifest(views: ExtensionViews) -> Manifest {
        Manifest {
            views,
            ..Default::default()
        }
    }

    #[test]
    fn explicit_port_is_used() {
        let m = manifest(ExtensionViews {
            panel: view("https://localhost:8080/panel"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(8080));
    }

    #[test]
    fn http_without_port_defaults_to_80() {
        let m = manifest(ExtensionViews {
            component: view("http://localhost/x"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(80));
    }

    #[test]
    fn other_schemes_without_port_default_to_443() {
        let m = manifest(ExtensionViews {
            mobile: view("https://localhost.rig.twitch.tv/mobile.html"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(443));

        let m = manifest(ExtensionViews {
            config: view("ws://localhost/config"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(443));
    }

    #[test]
    fn scheme_default_port_written_out_still_resolves() {
        let m = manifest(ExtensionViews {
            panel: view("http://localhost:80/panel"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(80));
    }

    #[test]
    fn written_default_port_of_other_schemes_is_kept() {
        let m = manifest(ExtensionViews {
            panel: view("ws://localhost:80/x"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(80));

        let m = manifest(ExtensionViews {
            panel: view("ftp://localhost:21/x"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(21));

        let m = manifest(ExtensionViews {
            panel: view("https://user:pw@[::1]:443/x"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(443));
    }

    #[test]
    fn written_port_detection() {
        assert!(has_written_port("wss://localhost:443/x"));
        assert!(has_written_port("http://[::1]:8080"));
        assert!(!has_written_port("http://[::1]/x"));
        assert!(!has_written_port("https://user:pw@localhost/x:9"));
        assert!(!has_written_port("https://localhost:/x"));
    }

    #[test]
    fn empty_views_fail() {
        let err = resolve_frontend_port(&Manifest::default()).unwrap_err();
        assert_eq!(err, PortError::Unresolvable);
        assert_eq!(
            err.to_string(),
            "Cannot determine front-end port from extension"
        );
    }

    #[test]
    fn views_without_viewer_url_fail() {
        let m = manifest(ExtensionViews {
            panel: Some(ExtensionView::default()),
            live_config: view(""),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Err(PortError::Unresolvable));
    }

    #[test]
    fn priority_order_wins_over_other_declared_views() {
        let m = manifest(ExtensionViews {
            live_config: view("https://localhost:9000/live"),
            video_overlay: view("https://localhost:8081/overlay"),
            mobile: view("https://localhost:8082/mobile"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(8081));
    }

    #[test]
    fn view_without_url_is_skipped_for_next_in_priority() {
        let m = manifest(ExtensionViews {
            panel: view(""),
            component: view("https://localhost:8443/c"),
            ..Default::default()
        });
        assert_eq!(resolve_frontend_port(&m), Ok(8443));
    }

    #[test]
    fn unparseable_url_is_an_error_not_a_zero_port() {
        let m = manifest(ExtensionViews {
            panel: view("not a url"),
            ..Default::default()
        });
        let err = resolve_frontend_port(&m).unwrap_err();
        assert!(matches!(err, PortError::InvalidViewerUrl { view: ViewType::Panel, .. }));
    }
}
