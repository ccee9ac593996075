use glam::Mat4;

/// Orthographic projection covering `[0, width] x [0, height]` with the origin
/// at the bottom-left and a depth range of [-1, 1].
pub fn orthographic(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width, 0.0, height, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let proj = orthographic(1024.0, 768.0);

        let bottom_left = proj.project_point3(Vec3::new(0.0, 0.0, 0.0));
        let top_right = proj.project_point3(Vec3::new(1024.0, 768.0, 0.0));

        assert!(close(bottom_left.truncate().extend(0.0), Vec3::new(-1.0, -1.0, 0.0)));
        assert!(close(top_right.truncate().extend(0.0), Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_center_maps_to_origin() {
        let proj = orthographic(200.0, 100.0);
        let center = proj.project_point3(Vec3::new(100.0, 50.0, 0.0));
        assert!(center.x.abs() < 1e-5);
        assert!(center.y.abs() < 1e-5);
    }

    #[test]
    fn test_depth_range_fits_clip_volume() {
        let proj = orthographic(10.0, 10.0);
        for z in [-1.0, 0.0, 1.0] {
            let p = proj.project_point3(Vec3::new(5.0, 5.0, z));
            assert!((-1e-5..=1.0 + 1e-5).contains(&p.z), "depth {} for z {}", p.z, z);
        }
    }
}
