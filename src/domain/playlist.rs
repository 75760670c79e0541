use super::id::Id;

/// Playlist aggregate root
///
/// A named, user-owned collection of videos. Enforces the naming rule and
/// the set semantics of the video list.
///
/// # Invariants
/// - Name cannot be empty
/// - A video appears in the list at most once
///
/// # Example
/// ```
/// use videotube_api::domain::{Id, Playlist};
///
/// let owner = Id::parse("ownerId").expect("valid id");
/// let playlist = Playlist::new("Watch later".to_string(), String::new(), owner)
///     .expect("valid playlist");
/// assert_eq!(playlist.name(), "Watch later");
/// assert!(playlist.videos().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    id: Id,
    name: String,
    description: String,
    owner_id: Id,
    videos: Vec<Id>,
}

impl Playlist {
    /// Creates a new Playlist aggregate
    ///
    /// # Business Rules Enforced
    /// - Name must not be empty
    /// - The video list starts empty
    pub fn new(name: String, description: String, owner_id: Id) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Name is required".to_string());
        }

        Ok(Self {
            id: Id::generate(),
            name,
            description,
            owner_id,
            videos: Vec::new(),
        })
    }

    /// Renames the playlist
    ///
    /// # Business Rules
    /// - The new name must not be empty
    pub fn rename(&mut self, name: String) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        self.name = name;
        Ok(())
    }

    /// Replaces the playlist description
    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Adds a video to the playlist
    ///
    /// Set semantics: returns false and leaves the list unchanged when the
    /// video is already present.
    pub fn add_video(&mut self, video_id: Id) -> bool {
        if self.videos.contains(&video_id) {
            return false;
        }
        self.videos.push(video_id);
        true
    }

    /// Removes a video from the playlist
    ///
    /// Returns false when the video was not in the list.
    pub fn remove_video(&mut self, video_id: &Id) -> bool {
        let before = self.videos.len();
        self.videos.retain(|v| v != video_id);
        self.videos.len() != before
    }

    // ===== Getters =====

    /// Returns the playlist's ID
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Returns the playlist's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the playlist's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the ID of the owning user
    pub fn owner_id(&self) -> &Id {
        &self.owner_id
    }

    /// Returns the videos in insertion order
    pub fn videos(&self) -> &[Id] {
        &self.videos
    }

    /// Reconstructs a Playlist from persistence layer data
    ///
    /// This method bypasses business rules validation since the data
    /// is already validated and stored in the database.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Id,
        name: String,
        description: String,
        owner_id: Id,
        videos: Vec<Id>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            owner_id,
            videos,
        }
    }
}
