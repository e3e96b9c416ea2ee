//! Camera for ray generation.
//!
//! The camera owns its output image. Rendering borrows the scene read-only,
//! fills the image, and leaves it in the camera until [`Camera::take_image`]
//! moves it out.

use prx_math::{look_at, Cofactor, Interval, Mat4, Mat4Ext, MathResult, Ray, Vec2, Vec3};

use crate::renderer::{render_into, CancelToken, RenderConfig};
use crate::{ImageBuffer, RenderError, RenderResult, Scene};

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    /// Horizontal-ish field of view in degrees (scaled by aspect ratio in x)
    fov: f32,

    x_res: u32,
    y_res: u32,

    /// Minimum distance needed to draw
    t_near: f32,
    /// Maximum draw distance
    t_far: f32,

    image: Option<ImageBuffer>,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 4.0),
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            fov: 45.0,
            x_res: 640,
            y_res: 480,
            t_near: 0.0,
            t_far: 1000.0,
            image: None,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the viewing direction (not a target point).
    pub fn with_forward(mut self, forward: Vec3) -> Self {
        self.forward = forward;
        self
    }

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.set_resolution(width, height);
        self
    }

    /// Set the near/far bounds for accepted hits.
    pub fn with_draw_distance(mut self, t_near: f32, t_far: f32) -> Self {
        self.t_near = t_near;
        self.t_far = t_far;
        self
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward;
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    /// Change the resolution. An owned image is resized to match.
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.x_res = width;
        self.y_res = height;
        if let Some(image) = &mut self.image {
            if (image.x_res(), image.y_res()) != (width, height) {
                image.resize(width, height);
            }
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn x_resolution(&self) -> u32 {
        self.x_res
    }

    pub fn y_resolution(&self) -> u32 {
        self.y_res
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.x_res as f32 / self.y_res as f32
    }

    /// Accepted range of hit distances.
    pub fn draw_distance(&self) -> Interval {
        Interval::new(self.t_near, self.t_far)
    }

    /// Pure translation to the camera position.
    pub fn translation_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }

    /// Give the camera an existing image buffer; the resolution follows it.
    pub fn assign_image(&mut self, image: ImageBuffer) -> RenderResult<()> {
        if self.image.is_some() {
            return Err(RenderError::ImageAlreadyAssigned);
        }
        self.x_res = image.x_res();
        self.y_res = image.y_res();
        self.image = Some(image);
        Ok(())
    }

    /// Allocate a black image buffer of the given size.
    pub fn allocate_image(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.assign_image(ImageBuffer::new(width, height))
    }

    pub fn image(&self) -> Option<&ImageBuffer> {
        self.image.as_ref()
    }

    /// Mutable access for callers that write into the buffer directly.
    ///
    /// Resizing through this reference is caught by the next render as a
    /// resolution mismatch.
    pub fn image_mut(&mut self) -> Option<&mut ImageBuffer> {
        self.image.as_mut()
    }

    /// Move the image out of the camera.
    pub fn take_image(&mut self) -> Option<ImageBuffer> {
        self.image.take()
    }

    /// Map a pixel center to [0, 1] x [0, 1].
    pub fn pixel_to_ndc(&self, pixel_x: f32, pixel_y: f32) -> Vec2 {
        Vec2::new(
            (pixel_x + 0.5) / self.x_res as f32,
            (pixel_y + 0.5) / self.y_res as f32,
        )
    }

    /// World-to-camera matrix.
    pub fn view_matrix(&self) -> MathResult<Mat4> {
        look_at(self.position, self.position + self.forward, self.up)
    }

    /// Camera-to-world matrix, the inverse of [`Camera::view_matrix`].
    pub fn camera_to_world(&self) -> MathResult<Mat4> {
        self.view_matrix()?.try_inverse()
    }

    /// Validate the configuration and precompute everything needed to
    /// generate primary rays.
    pub fn ray_generator(&self) -> RenderResult<RayGenerator> {
        if self.x_res == 0 || self.y_res == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.x_res,
                height: self.y_res,
            });
        }

        let world_to_camera = self.view_matrix()?;
        let camera_to_world = world_to_camera.try_inverse()?;
        log::debug!("camera-to-world: {camera_to_world}");

        Ok(RayGenerator {
            origin: self.position,
            camera_to_world,
            world_to_camera,
            scale: (self.fov.to_radians() * 0.5).tan(),
            aspect: self.aspect_ratio(),
            width: self.x_res,
            height: self.y_res,
            draw_distance: self.draw_distance(),
        })
    }

    /// Primary ray through image pixel (x, row), row 0 at the top.
    pub fn primary_ray(&self, x: u32, row: u32) -> RenderResult<Ray> {
        if x >= self.x_res || row >= self.y_res {
            return Err(RenderError::PixelOutOfRange {
                x,
                row,
                width: self.x_res,
                height: self.y_res,
            });
        }
        Ok(self.ray_generator()?.image_ray(x, row))
    }

    /// Project a world-space point to image coordinates.
    ///
    /// See [`RayGenerator::world_to_raster`].
    pub fn world_to_raster(&self, point: Vec3) -> RenderResult<Option<Vec2>> {
        Ok(self.ray_generator()?.world_to_raster(point))
    }

    /// Render the scene into the camera's own image buffer.
    ///
    /// Allocates the buffer on first use.
    pub fn cast_rays(&mut self, scene: &Scene, config: &RenderConfig) -> RenderResult<()> {
        self.cast_rays_cancellable(scene, config, &CancelToken::new())
    }

    /// [`Camera::cast_rays`] that stops between rows once `cancel` fires.
    pub fn cast_rays_cancellable(
        &mut self,
        scene: &Scene,
        config: &RenderConfig,
        cancel: &CancelToken,
    ) -> RenderResult<()> {
        let mut image = self
            .image
            .take()
            .unwrap_or_else(|| ImageBuffer::new(self.x_res, self.y_res));

        let result = self
            .ray_generator()
            .and_then(|rays| render_into(&rays, scene, config, &mut image, cancel));

        self.image = Some(image);
        result
    }

    /// Render into a fresh buffer without touching the camera's own image.
    pub fn render(&self, scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
        let rays = self.ray_generator()?;
        let mut image = ImageBuffer::new(self.x_res, self.y_res);
        render_into(&rays, scene, config, &mut image, &CancelToken::new())?;
        Ok(image)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Precomputed camera state for one render.
#[derive(Debug, Clone, Copy)]
pub struct RayGenerator {
    origin: Vec3,
    camera_to_world: Mat4,
    world_to_camera: Mat4,
    /// tan(fov / 2)
    scale: f32,
    aspect: f32,
    width: u32,
    height: u32,
    draw_distance: Interval,
}

impl RayGenerator {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn draw_distance(&self) -> Interval {
        self.draw_distance
    }

    /// Primary ray for pixel (px, py) with `py` counted from the bottom row.
    pub fn ray(&self, px: u32, py: u32) -> Ray {
        let x = (2.0 * (px as f32 + 0.5) / self.width as f32 - 1.0) * self.aspect * self.scale;
        let y = (2.0 * (py as f32 + 0.5) / self.height as f32 - 1.0) * self.scale;

        // The camera looks down -Z; the rotation keeps the direction non-zero
        let direction = self
            .camera_to_world
            .mult_dir_matrix(Vec3::new(x, y, -1.0))
            .normalize();

        Ray::new(self.origin, direction)
    }

    /// Primary ray for image pixel (x, row) with row 0 at the top.
    ///
    /// `row` must be below `height`.
    pub(crate) fn image_ray(&self, x: u32, row: u32) -> Ray {
        self.ray(x, self.height - (row + 1))
    }

    /// Project a world-space point to continuous image coordinates
    /// (row 0 at the top).
    ///
    /// Returns `None` for points behind the camera or outside the canvas.
    pub fn world_to_raster(&self, point: Vec3) -> Option<Vec2> {
        let p = self.world_to_camera.mult_vec_matrix(point);
        if p.z >= 0.0 {
            return None;
        }

        let screen = Vec2::new(p.x / -p.z, p.y / -p.z);
        let half_width = self.aspect * self.scale;
        let half_height = self.scale;
        if screen.x.abs() > half_width || screen.y.abs() > half_height {
            return None;
        }

        let ndc_x = (screen.x / half_width + 1.0) * 0.5;
        let ndc_y = (screen.y / half_height + 1.0) * 0.5;
        Some(Vec2::new(
            ndc_x * self.width as f32,
            (1.0 - ndc_y) * self.height as f32,
        ))
    }
}
