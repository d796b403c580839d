use serde::{Deserialize, Serialize};

/// Extension manifest, as far as rig needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub views: ExtensionViews,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The view-type table. A view type is declared when its entry is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionViews {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<ExtensionView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ExtensionView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_overlay: Option<ExtensionView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<ExtensionView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ExtensionView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_config: Option<ExtensionView>,

    /// View types rig does not act on.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionView {
    #[serde(default)]
    pub viewer_url: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Recognized extension view types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    Panel,
    Component,
    VideoOverlay,
    Mobile,
    Config,
    LiveConfig,
}

impl ViewType {
    /// All view types in declaration order. The order doubles as the
    /// priority used when picking the front-end port.
    pub const ALL: [ViewType; 6] = [
        ViewType::Panel,
        ViewType::Component,
        ViewType::VideoOverlay,
        ViewType::Mobile,
        ViewType::Config,
        ViewType::LiveConfig,
    ];

    /// View types a viewer can place on a channel page.
    pub const EXTENSION_TYPES: [ViewType; 4] = [
        ViewType::Panel,
        ViewType::Component,
        ViewType::VideoOverlay,
        ViewType::Mobile,
    ];

    /// Manifest key for this view type.
    pub fn key(&self) -> &'static str {
        match self {
            ViewType::Panel => "panel",
            ViewType::Component => "component",
            ViewType::VideoOverlay => "videoOverlay",
            ViewType::Mobile => "mobile",
            ViewType::Config => "config",
            ViewType::LiveConfig => "liveConfig",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewType::Panel => "Panel",
            ViewType::Component => "Component",
            ViewType::VideoOverlay => "Video Overlay",
            ViewType::Mobile => "Mobile",
            ViewType::Config => "Config",
            ViewType::LiveConfig => "Live Config",
        }
    }
}

impl std::fmt::Display for ViewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl ExtensionViews {
    pub fn get(&self, view_type: ViewType) -> Option<&ExtensionView> {
        match view_type {
            ViewType::Panel => self.panel.as_ref(),
            ViewType::Component => self.component.as_ref(),
            ViewType::VideoOverlay => self.video_overlay.as_ref(),
            ViewType::Mobile => self.mobile.as_ref(),
            ViewType::Config => self.config.as_ref(),
            ViewType::LiveConfig => self.live_config.as_ref(),
        }
    }
}

impl Manifest {
    /// Comma-separated names of the declared extension types,
    /// e.g. `"Panel, Video Overlay"`.
    pub fn extension_types_label(&self) -> String {
        ViewType::EXTENSION_TYPES
            .iter()
            .filter(|t| self.views.get(**t).is_some())
            .map(|t| t.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(url: &str) -> Option<ExtensionView> {
        Some(ExtensionView {
            viewer_url: url.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn views_parse_camel_case_keys() {
        let json = r#"{"videoOverlay":{"viewerUrl":"https://localhost:8080/o.html"},"liveConfig":{}}"#;
        let views: ExtensionViews = serde_json::from_str(json).unwrap();
        assert_eq!(
            views.get(ViewType::VideoOverlay).map(|v| v.viewer_url.as_str()),
            Some("https://localhost:8080/o.html")
        );
        assert_eq!(
            views.get(ViewType::LiveConfig).map(|v| v.viewer_url.as_str()),
            Some("")
        );
        assert!(views.get(ViewType::Panel).is_none());
    }

    #[test]
    fn unrecognized_view_types_are_kept() {
        let json = r#"{"panel":{"viewerUrl":"https://localhost:8080/p.html"},"hidden":{"viewerUrl":"x"}}"#;
        let views: ExtensionViews = serde_json::from_str(json).unwrap();
        assert!(views.other.contains_key("hidden"));
        let saved = serde_json::to_value(&views).unwrap();
        assert_eq!(saved["hidden"]["viewerUrl"], "x");
        assert!(saved.get("component").is_none());
    }

    #[test]
    fn extension_types_label_lists_present_types_in_order() {
        let manifest = Manifest {
            views: ExtensionViews {
                mobile: view("https://localhost:8080/m.html"),
                panel: view("https://localhost:8080/p.html"),
                config: view("https://localhost:8080/c.html"),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(manifest.extension_types_label(), "Panel, Mobile");
    }

    #[test]
    fn extension_types_label_is_empty_without_views() {
        assert_eq!(Manifest::default().extension_types_label(), "");
    }

    #[test]
    fn priority_order_starts_with_panel_and_ends_with_live_config() {
        assert_eq!(ViewType::ALL.first(), Some(&ViewType::Panel));
        assert_eq!(ViewType::ALL.last(), Some(&ViewType::LiveConfig));
        assert_eq!(ViewType::VideoOverlay.to_string(), "videoOverlay");
    }
}
