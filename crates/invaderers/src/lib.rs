use std::path::Path;

use anyhow::Result;
use invaderers_game::{AssetManifest, GameConfig, InvaderersApp, Rules};
use invaderers_sdl2::App;
use invaderers_sdl2::{SdlContext, SdlInitInfo};

/// Which set of gameplay rules to play with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RuleSet {
    /// Fire gated on odd lives, bomber scan from a random start.
    Classic,
    #[default]
    Modern,
}

impl RuleSet {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "modern" => Some(Self::Modern),
            _ => None,
        }
    }

    pub fn rules(self) -> Rules {
        match self {
            Self::Classic => Rules::classic(),
            Self::Modern => Rules::default(),
        }
    }
}

pub fn run(asset_dir: &Path, rule_set: RuleSet) -> Result<()> {
    let manifest = AssetManifest::new(asset_dir);
    let config = GameConfig::builder().rules(rule_set.rules()).build();
    log::info!("loading assets from {}", asset_dir.display());

    let app = InvaderersApp::load(&manifest, config)?;
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rule_sets() {
        assert_eq!(RuleSet::parse("classic"), Some(RuleSet::Classic));
        assert_eq!(RuleSet::parse("MODERN"), Some(RuleSet::Modern));
        assert_eq!(RuleSet::parse("retro"), None);
        assert_eq!(RuleSet::Classic.rules(), Rules::classic());
        assert_eq!(RuleSet::default().rules(), Rules::default());
    }
}
