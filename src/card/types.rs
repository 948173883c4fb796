//! Card domain types

use serde::{Deserialize, Serialize};

/// Kind of GitHub entity a card points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    #[default]
    Repository,
    Issue,
    PullRequest,
    Discussion,
    Release,
}

/// Which extra field a card type needs on top of user/repo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    None,
    Number,
    Tag,
}

impl CardType {
    /// All card types in selector order
    pub const ALL: [CardType; 5] = [
        CardType::Repository,
        CardType::Issue,
        CardType::PullRequest,
        CardType::Discussion,
        CardType::Release,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Repository => Self::Issue,
            Self::Issue => Self::PullRequest,
            Self::PullRequest => Self::Discussion,
            Self::Discussion => Self::Release,
            Self::Release => Self::Repository,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Repository => Self::Release,
            Self::Issue => Self::Repository,
            Self::PullRequest => Self::Issue,
            Self::Discussion => Self::PullRequest,
            Self::Release => Self::Discussion,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Repository => "Repository",
            Self::Issue => "Issue",
            Self::PullRequest => "Pull Request",
            Self::Discussion => "Discussion",
            Self::Release => "Release",
        }
    }

    pub fn requirement(&self) -> Requirement {
        match self {
            Self::Repository => Requirement::None,
            Self::Issue | Self::PullRequest | Self::Discussion => Requirement::Number,
            Self::Release => Requirement::Tag,
        }
    }

    /// Opaque content identifier the image service expects for this card type
    pub fn image_id(&self) -> &'static str {
        match self {
            Self::Repository => "1182ac2a6b917c0126f8a2c69f656f024664cc85d6f45ed0bf6784a451252bc4",
            Self::Issue => "ed828fabdcdfa075cb95774feeeb1b7f754b7d39a6c887c3afbe9b79f605a2c6",
            Self::PullRequest => "610b7568cc3d2169b13b60270a4b951b9ae1f50af19fef1a2b3bace6bc84d9d2",
            Self::Discussion => "d51c46d583810dcadc7c55b05681c3d4c1fa8b9466ab85c41eeeef8593af50a4",
            Self::Release => "449befa7a655d574deac2ecf7dcac34fecfbf97eff3c619c5d945d6d59c9826c",
        }
    }
}

/// Raw form contents as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub card_type: CardType,
    pub user: String,
    pub repo: String,
    pub num: Option<u64>,
    pub tag: Option<String>,
}

impl FormInput {
    /// Empty form preselecting the given card type
    pub fn with_card_type(card_type: CardType) -> Self {
        Self {
            card_type,
            ..Default::default()
        }
    }

    /// True when both user and repository hold something other than whitespace
    pub fn has_identity(&self) -> bool {
        !self.user.trim().is_empty() && !self.repo.trim().is_empty()
    }
}

/// Type-specific part of a validated card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    None,
    Number(u64),
    Tag(String),
}

/// Input that passed validation. Only `validate` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub(super) card_type: CardType,
    pub(super) user: String,
    pub(super) repo: String,
    pub(super) detail: Detail,
}

impl ValidatedInput {
    /// GitHub path shared by the image URL and the target URL
    pub fn path_suffix(&self) -> String {
        let base = format!("/{}/{}", self.user, self.repo);
        match (&self.card_type, &self.detail) {
            (CardType::Issue, Detail::Number(n)) => format!("{base}/issues/{n}"),
            (CardType::PullRequest, Detail::Number(n)) => format!("{base}/pull/{n}"),
            (CardType::Discussion, Detail::Number(n)) => format!("{base}/discussions/{n}"),
            (CardType::Release, Detail::Tag(tag)) => format!("{base}/releases/tag/{tag}"),
            _ => base,
        }
    }
}
