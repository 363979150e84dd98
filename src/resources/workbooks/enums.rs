//! Closed sets of string constants used by the workbook services.
//!
//! The provider matches these values case-sensitively, so they are
//! modeled as enums that serialize to the exact wire strings.

use std::fmt;

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// The wire value the provider expects.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Calculation modes for `Application::calculate`.
    CalculationType {
        Recalculate => "Recalculate",
        Full => "Full",
        FullRebuild => "FullRebuild",
    }
}

wire_enum! {
    /// Worksheet visibility states for `Worksheets::update`.
    WorksheetVisibility {
        Visible => "Visible",
        Hidden => "Hidden",
        VeryHidden => "VeryHidden",
    }
}

wire_enum! {
    /// Shift directions for range inserts (`Down`, `Right`) and
    /// deletes (`Up`, `Left`).
    RangeShift {
        Down => "Down",
        Right => "Right",
        Up => "Up",
        Left => "Left",
    }
}

wire_enum! {
    /// Underline styles for range font formatting.
    Underline {
        None => "None",
        Single => "Single",
        Double => "Double",
        SingleAccountant => "SingleAccountant",
        DoubleAccountant => "DoubleAccountant",
    }
}

wire_enum! {
    /// Vertical alignment for range formatting.
    VerticalAlignment {
        Top => "Top",
        Center => "Center",
        Bottom => "Bottom",
        Justify => "Justify",
        Distributed => "Distributed",
    }
}

wire_enum! {
    /// Horizontal alignment for range formatting.
    HorizontalAlignment {
        General => "General",
        Left => "Left",
        Center => "Center",
        Right => "Right",
        Fill => "Fill",
        Justify => "Justify",
        CenterAcrossSelection => "CenterAcrossSelection",
        Distributed => "Distributed",
    }
}

wire_enum! {
    /// Border line styles.
    BorderStyle {
        None => "None",
        Continuous => "Continuous",
        Dash => "Dash",
        DashDot => "DashDot",
        DashDotDot => "DashDotDot",
        Dot => "Dot",
        Double => "Double",
        SlantDashDot => "SlantDashDot",
    }
}

wire_enum! {
    /// Border line weights.
    BorderWeight {
        Hairline => "Hairline",
        Thin => "Thin",
        Medium => "Medium",
        Thick => "Thick",
    }
}

wire_enum! {
    /// What a range clear applies to.
    ApplyTo {
        All => "All",
        Formats => "Formats",
        Contents => "Contents",
    }
}
