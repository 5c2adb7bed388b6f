//! Cross-frontend primitives for presenting the fighter select screen.
//!
//! Houses intent dispatch, notices, the delayed-confirmation affordance and
//! view-model types that the terminal client and future graphical clients can
//! reuse. Nothing here renders; frontends turn [`view_model::SelectScreen`]
//! into pixels or cells.
pub mod config;
pub mod confirm;
pub mod event;
pub mod frontend;
pub mod intent;
pub mod notice;
pub mod view_model;

pub use config::{ConfirmConfig, FrontendConfig, NoticeConfig, SelectionSettings};
pub use confirm::PendingConfirm;
pub use event::{EventImpact, NoticeConsumer, SelectionConsumer};
pub use frontend::FrontendApp;
pub use intent::{Intent, dispatch};
pub use notice::{Notice, NoticeLevel, NoticeLog};
pub use view_model::{CardView, ConfirmButton, FighterDetail, PresentationMapper, SelectScreen};
