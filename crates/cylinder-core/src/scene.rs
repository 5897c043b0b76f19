use crate::camera::RayCaster;
use crate::config::{ConfigError, SceneConfig};
use crate::geometry::generate_cylinder_grid;
use crate::input::FrameInput;
use crate::interaction::{process_drag_and_drop, DragSession, InteractionEvents};
use crate::markers::MarkerStore;
use crate::rotation::RotationState;
use glam::{DMat4, DVec3};

/// Complete state of one cylinder scene, advanced once per frame.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub config: SceneConfig,
    grid: Vec<DVec3>,
    pub markers: MarkerStore,
    pub drag: DragSession,
    pub rotation: RotationState,
}

impl SceneState {
    /// Validates `config`, samples the grid and fills every slot.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = generate_cylinder_grid(
            config.cylinder_radius,
            config.cylinder_height,
            config.angular_divisions,
            config.height_divisions,
            config.grid_margin,
        );
        if grid.is_empty() {
            log::warn!("cylinder grid is empty; no markers will be spawned");
        }
        let markers = MarkerStore::from_grid(&grid);
        log::info!("scene ready with {} slots", grid.len());
        Ok(Self {
            config,
            grid,
            markers,
            drag: DragSession::default(),
            rotation: RotationState::default(),
        })
    }

    /// Rotation first, then interaction against the updated transform.
    pub fn update<C: RayCaster + ?Sized>(
        &mut self,
        frame: &FrameInput,
        camera: &C,
    ) -> InteractionEvents {
        self.rotation.update(
            frame.elapsed_seconds,
            &frame.pointer,
            self.drag.is_active(),
            &self.config,
        );
        let transform = self.rotation.transform();
        process_drag_and_drop(
            &mut self.markers,
            &mut self.drag,
            &frame.pointer,
            camera,
            &transform,
            &self.grid,
            &self.config,
        )
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        let enabled = self.rotation.toggle_auto_rotate();
        log::info!("auto-rotation {}", if enabled { "on" } else { "off" });
        enabled
    }

    /// Slot positions in the cylinder's local frame.
    pub fn grid(&self) -> &[DVec3] {
        &self.grid
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.drag.marker_index()
    }

    pub fn snap_candidates(&self) -> &[usize] {
        self.drag.snap_candidates()
    }

    #[inline]
    pub fn transform(&self) -> DMat4 {
        self.rotation.transform()
    }
}
