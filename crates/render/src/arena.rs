use pathforge_common::TileDescriptor;
use pathforge_level::LevelDescriptor;

/// Renderable handles for the current level, indexed like its tiles.
///
/// The arena is the rendering layer's property; the generator only hands
/// over descriptors.
#[derive(Debug)]
pub struct TileArena<H> {
    handles: Vec<H>,
    generation: u64,
}

impl<H> Default for TileArena<H> {
    fn default() -> Self {
        Self {
            handles: Vec::new(),
            generation: 0,
        }
    }
}

impl<H> TileArena<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Number of levels applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle for tile `index` of the current level.
    pub fn get(&self, index: usize) -> Option<&H> {
        self.handles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, H> {
        self.handles.iter()
    }

    /// Release every handle.
    pub fn clear(&mut self, despawn: impl FnMut(H)) {
        self.handles.drain(..).for_each(despawn);
    }

    /// Despawn all handles of the previous level, then spawn one per tile of `level`.
    pub fn rebuild(
        &mut self,
        level: &LevelDescriptor,
        mut spawn: impl FnMut(usize, &TileDescriptor) -> H,
        despawn: impl FnMut(H),
    ) {
        let released = self.handles.len();
        self.clear(despawn);
        self.handles = level
            .tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| spawn(i, tile))
            .collect();
        self.generation += 1;
        tracing::debug!(
            released,
            spawned = self.handles.len(),
            generation = self.generation,
            "tile arena rebuilt"
        );
    }
}
