// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Fixed padding

use super::BoxedWidget;
use crate::style::Padding;
use kas::cast::ConvFloat;
use kas::prelude::*;

/// Margins for `padding` along one axis at the given `scale` factor
///
/// Values beyond `u16::MAX` physical pixels saturate.
pub(crate) fn scaled_margins(padding: Padding, vertical: bool, scale: f32) -> (u16, u16) {
    let (before, after) = padding.along(vertical);
    let px = |value: f32| u16::try_conv_nearest(value * scale).unwrap_or(u16::MAX);
    (px(before), px(after))
}

#[impl_self]
mod Padded {
    /// Apply fixed padding around a widget
    ///
    /// This replaces the inner widget's margins. Padding is given in logical
    /// pixels and scaled by the window's scale factor.
    #[widget]
    #[layout(self.inner)]
    pub struct Padded {
        core: widget_core!(),
        #[widget]
        inner: BoxedWidget,
        padding: Padding,
    }

    impl Self {
        /// Construct
        #[inline]
        pub fn new(inner: BoxedWidget, padding: Padding) -> Self {
            Padded {
                core: Default::default(),
                inner,
                padding,
            }
        }

        /// Get the padding
        #[inline]
        pub fn padding(&self) -> Padding {
            self.padding
        }
    }

    impl Layout for Self {
        fn size_rules(&mut self, cx: SizeCx, axis: AxisInfo) -> SizeRules {
            let scale = cx.scale_factor();
            let mut rules = kas::MacroDefinedLayout::size_rules(self, cx, axis);
            rules.set_margins(scaled_margins(self.padding, axis.is_vertical(), scale));
            rules
        }
    }

    impl Events for Self {
        type Data = ();
    }
}
