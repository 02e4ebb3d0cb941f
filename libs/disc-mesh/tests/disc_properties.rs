use approx::assert_abs_diff_eq;
use config::constants::RADIUS_TOLERANCE;
use disc_mesh::{DiscMesh, DiscMeshError, DiscParams, MesherConfig, PlaneBasis, Rgb8};
use glam::DVec3;

fn sample_normals() -> Vec<DVec3> {
    vec![
        DVec3::Z,
        DVec3::NEG_Z,
        DVec3::X,
        DVec3::Y,
        DVec3::new(1.0, 0.0, 1.0),
        DVec3::new(0.0, 1.0, 1.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(-0.3, 0.8, 0.1),
        DVec3::new(1e-3, 0.0, 1e-3),
        DVec3::new(250.0, -40.0, 3.0),
    ]
}

#[test]
fn counts_hold_for_many_inputs() {
    for normal in sample_normals() {
        for segments in [3, 4, 5, 17, 120] {
            let disc =
                DiscMesh::with_params(DVec3::new(1.0, 2.0, 3.0), 0.75, normal, Rgb8::WHITE, segments)
                    .unwrap();
            assert_eq!(disc.vertices().len(), segments as usize + 1);
            assert_eq!(disc.faces().len(), segments as usize);
            assert_eq!(disc.faces_as_flat_floats().len(), segments as usize * 9);
        }
    }
}

#[test]
fn boundary_lies_on_circle_in_plane() {
    let center = DVec3::new(-1.0, 0.5, 2.0);
    for normal in sample_normals() {
        let disc = DiscMesh::with_params(center, 4.0, normal, Rgb8::BLACK, 50).unwrap();
        let unit = normal.normalize();
        assert_eq!(disc.vertices()[0], center);
        for vertex in &disc.vertices()[1..] {
            assert_abs_diff_eq!(vertex.distance(center), 4.0, epsilon = RADIUS_TOLERANCE);
            assert_abs_diff_eq!((*vertex - center).dot(unit), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn basis_is_orthogonal_for_many_normals() {
    for normal in sample_normals() {
        let basis = PlaneBasis::new(normal, 1.0, 1e-5).unwrap();
        assert_abs_diff_eq!(basis.u().dot(basis.v()), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(basis.u().dot(normal), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(basis.v().dot(normal), 0.0, epsilon = 1e-6);
        // Crossing the normal with each axis keeps them orthogonal.
        let cu = normal.cross(basis.u());
        let cv = normal.cross(basis.v());
        assert_abs_diff_eq!(cu.dot(cv) / (cu.length() * cv.length()), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn faces_are_pairwise_distinct() {
    for normal in sample_normals() {
        let disc = DiscMesh::with_params(DVec3::ZERO, 1.0, normal, Rgb8::BLACK, 64).unwrap();
        for face in disc.faces() {
            assert_ne!(face.v1, face.v2);
            assert_ne!(face.v2, face.v3);
            assert_ne!(face.v1, face.v3);
        }
    }
}

#[test]
fn unit_disc_with_four_segments() {
    let disc = DiscMesh::with_params(DVec3::ZERO, 1.0, DVec3::Z, Rgb8::BLACK, 4).unwrap();
    let v = disc.vertices();
    assert_eq!(v.len(), 5);
    assert_eq!(v[0], DVec3::ZERO);
    for pair in v[1..].windows(2) {
        // Consecutive boundary points are a quarter turn apart.
        assert_abs_diff_eq!(pair[0].dot(pair[1]), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pair[0].cross(pair[1]).z, 1.0, epsilon = 1e-12);
    }
    let last = disc.faces()[3];
    assert_eq!([last.v1, last.v2, last.v3], [v[4], v[0], v[1]]);
}

#[test]
fn zero_normal_is_rejected() {
    let err = DiscMesh::with_params(DVec3::ZERO, 1.0, DVec3::ZERO, Rgb8::BLACK, 16).unwrap_err();
    assert!(matches!(err, DiscMeshError::InvalidGeometry { .. }));
}

#[test]
fn two_segments_are_rejected() {
    let err = DiscMesh::with_params(DVec3::ZERO, 1.0, DVec3::Z, Rgb8::BLACK, 2).unwrap_err();
    assert!(matches!(err, DiscMeshError::InvalidGeometry { .. }));
}

#[test]
fn json_configured_pipeline() {
    let config = MesherConfig::from_json(r#"{ "default_segments": 6, "max_segments": 64 }"#)
        .unwrap();
    let params = DiscParams::from_json(
        r#"{ "center": [0.0, 0.0, 2.0], "radius": 0.5, "color": { "r": 255, "g": 128, "b": 0 } }"#,
    )
    .unwrap();

    let disc = DiscMesh::from_params(&params, &config).unwrap();
    assert_eq!(disc.segments(), 6);
    assert_eq!(disc.color().r, 1.0);

    let too_many = params.with_segments(65);
    let err = DiscMesh::from_params(&too_many, &config).unwrap_err();
    assert!(matches!(
        err,
        DiscMeshError::SegmentLimitExceeded { count: 65, max: 64 }
    ));
}

#[test]
fn discs_build_on_separate_threads() {
    let handles: Vec<_> = (3..11u32)
        .map(|segments| {
            std::thread::spawn(move || {
                DiscMesh::with_params(DVec3::ZERO, 1.0, DVec3::Y, Rgb8::BLACK, segments)
            })
        })
        .collect();
    for (segments, handle) in (3..11u32).zip(handles) {
        let disc = handle.join().unwrap().unwrap();
        assert_eq!(disc.segments(), segments);
    }
}
