// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Misuse of the navigation channels.

use thiserror::Error;

/// Navigation was requested where no provider can serve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrillDownError {
    /// The scope has no enclosing provider.
    #[error("drill-down navigation used outside of a menu content provider")]
    OutsideProvider,
    /// The provider behind a retained action handle has been dropped.
    #[error("drill-down provider was dropped while its actions were still in use")]
    ProviderDropped,
}
