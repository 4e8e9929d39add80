/// Counters shown at the top of the admin panel
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub total_users: usize,
    pub total_images: usize,
    /// Images whose `createdAt` falls on the current local date
    pub today_analyses: usize,
    /// Whether the backend answered the last refresh
    pub online: bool,
}

impl ServiceStats {
    /// Stats shown when the backend could not be reached
    pub fn offline() -> Self {
        Self::default()
    }
}
