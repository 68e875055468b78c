//! Typed event sets
//!
//! Handler families carve their custom events out of the flat [`Event`]
//! space. [`event_set!`] turns one level of that hierarchy into an enum
//! whose range starts at a base tag and exposes its own end, so the next
//! level can start where this one stops.
//!
//! [`Event`]: crate::Event

/// Declare a contiguous range of custom events as a `#[repr(u8)]` enum.
///
/// The first variant takes the value of the base event; the others follow
/// in declaration order. The generated type provides:
///
/// - `FIRST` / `END`: first tag in the set and first tag after it
/// - `COUNT`: number of variants
/// - `event()`, `name()`, `from_event()`, `contains()`
/// - `From<Set> for Event`
///
/// Compilation fails if the set does not fit below `u8::MAX`.
///
/// # Example
///
/// ```
/// use escapement_core::{event_set, Event};
///
/// event_set! {
///     /// Events shared by every network state
///     pub enum NetEvent: Event::MAX {
///         LinkDown,
///         LinkUp,
///     }
/// }
///
/// event_set! {
///     pub enum DhcpEvent: NetEvent::END {
///         LeaseAcquired,
///     }
/// }
///
/// assert_eq!(NetEvent::LinkDown.event(), Event::MAX);
/// assert_eq!(DhcpEvent::LeaseAcquired.event(), Event::new(6));
/// assert_eq!(NetEvent::from_event(Event::new(5)), Some(NetEvent::LinkUp));
/// ```
#[macro_export]
macro_rules! event_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $base:path {
            $(#[$first_meta:meta])*
            $first:ident
            $(
                ,
                $(#[$variant_meta:meta])*
                $variant:ident
            )*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $(#[$first_meta])*
            $first = $crate::Event::raw($base),
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        #[allow(dead_code)]
        impl $name {
            const VARIANTS: &'static [$name] = &[$name::$first $(, $name::$variant)*];

            /// Number of events in this set
            pub const COUNT: usize = Self::VARIANTS.len();

            /// First tag in this set
            pub const FIRST: $crate::Event = $base;

            /// First tag after this set; the base for the next level down
            pub const END: $crate::Event = Self::FIRST.offset(Self::COUNT as u8);

            /// Tag carried by this variant
            pub const fn event(self) -> $crate::Event {
                $crate::Event::new(self as u8)
            }

            /// Variant name, for logging
            pub const fn name(self) -> &'static str {
                match self {
                    $name::$first => stringify!($first),
                    $($name::$variant => stringify!($variant),)*
                }
            }

            /// Check if `event` falls inside this set
            pub const fn contains(event: $crate::Event) -> bool {
                event.raw() >= Self::FIRST.raw() && event.raw() < Self::END.raw()
            }

            /// Map a raw event back onto this set
            pub fn from_event(event: $crate::Event) -> Option<Self> {
                Self::VARIANTS.iter().copied().find(|v| v.event() == event)
            }
        }

        const _: () = assert!(
            $crate::Event::raw($base) as usize + $name::COUNT <= u8::MAX as usize,
            "event set overflows the u8 tag space"
        );

        impl From<$name> for $crate::Event {
            fn from(value: $name) -> Self {
                value.event()
            }
        }
    };
}
