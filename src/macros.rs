/// Declares accessor functions for fields of [`crate::global_state::Globals`].
///
/// ```ignore
/// global_signals! {
///     pub rotation => rotation: SnapshotRotation,
///     pub display_time => display_time: String,
/// }
/// ```
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
