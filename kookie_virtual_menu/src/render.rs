// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item rendering strategies.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::ItemProps;

/// Produces the text of a label-rendered item.
pub enum LabelAccessor<T> {
    /// Borrows a field of the item.
    Field(fn(&T) -> &str),
    /// Computes an owned label.
    Computed(Box<dyn Fn(&T) -> String>),
}

impl<T> LabelAccessor<T> {
    /// Convenience constructor for [`LabelAccessor::Computed`].
    pub fn computed(label: impl Fn(&T) -> String + 'static) -> Self {
        Self::Computed(Box::new(label))
    }

    /// The label of `item`.
    pub fn label<'a>(&self, item: &'a T) -> Cow<'a, str> {
        match self {
            Self::Field(field) => Cow::Borrowed(field(item)),
            Self::Computed(label) => Cow::Owned(label(item)),
        }
    }
}

impl<T> fmt::Debug for LabelAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(_) => f.write_str("Field(..)"),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// How items become host nodes of type `N`.
pub enum ItemRenderer<T, N> {
    /// Plain text from a label accessor; the host renders its default item.
    Label(LabelAccessor<T>),
    /// A custom renderer receiving the item and its full prop bundle.
    Custom(Box<dyn Fn(&T, &ItemProps) -> N>),
}

impl<T, N> ItemRenderer<T, N> {
    /// Renders `item` with `props`.
    pub fn render(&self, item: &T, props: ItemProps) -> ItemView<N> {
        match self {
            Self::Label(accessor) => ItemView::Label {
                text: accessor.label(item).into_owned(),
                props,
            },
            Self::Custom(render) => ItemView::Custom(render(item, &props)),
        }
    }
}

impl<T, N> fmt::Debug for ItemRenderer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(accessor) => f.debug_tuple("Label").field(accessor).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One rendered item.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemView<N> {
    /// A default item: the host renders `text` on an element carrying `props`.
    Label {
        /// Props to spread onto the item element.
        props: ItemProps,
        /// The item label.
        text: String,
    },
    /// Output of a custom renderer, which already applied the props.
    Custom(N),
}

/// A virtual menu was configured inconsistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Neither a label accessor nor a custom renderer was supplied.
    #[error("a virtual menu needs either a label accessor or a custom item renderer")]
    MissingRenderer,
    /// Both a label accessor and a custom renderer were supplied.
    #[error("a virtual menu takes a label accessor or a custom item renderer, not both")]
    ConflictingRenderers,
}
