/// `_NET_WM_STATE` atoms as seen by the task list. Only `SkipTaskbar`,
/// `SkipPager` and `DemandsAttention` change what a button shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WindowState {
    Modal,
    Sticky,
    MaximizedVert,
    MaximizedHorz,
    Shaded,
    SkipTaskbar,
    SkipPager,
    Hidden,
    Fullscreen,
    Above,
    Below,
    DemandsAttention,
}
