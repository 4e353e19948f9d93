use glam::Vec2;
use sierpinski::{
    midpoint, triangle_count, SubdivisionError, SubdivisionGenerator, SubdivisionPolicy, Triangle,
    TriangleColors, VertexBuffer,
};

#[cfg(test)]
mod subdivision_tests {
    use super::*;

    fn seed() -> Triangle {
        Triangle::new(
            Vec2::new(0.0, 0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(-0.5, -0.5),
        )
    }

    /// Triangles as sortable float keys so order does not matter
    fn triangle_multiset(buffer: &VertexBuffer) -> Vec<[u32; 6]> {
        let mut keys: Vec<[u32; 6]> = buffer
            .triangles()
            .map(|t| {
                [
                    t.a.x.to_bits(),
                    t.a.y.to_bits(),
                    t.b.x.to_bits(),
                    t.b.y.to_bits(),
                    t.c.x.to_bits(),
                    t.c.y.to_bits(),
                ]
            })
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_sierpinski_count_follows_geometric_series() {
        let generator = SubdivisionGenerator::sierpinski(TriangleColors::WHITE);

        for depth in 0..=6 {
            let buffer = generator.generate_new(&seed(), depth).unwrap();
            let expected = (3usize.pow(depth as u32 + 1) - 1) / 2;

            assert_eq!(buffer.triangle_count(), expected, "depth {}", depth);
            assert_eq!(buffer.len(), 3 * expected, "depth {}", depth);
            assert_eq!(buffer.as_floats().len(), 18 * expected, "depth {}", depth);
            assert_eq!(
                triangle_count(SubdivisionPolicy::Sierpinski, depth as u32),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_single_arm_count_is_linear() {
        let generator = SubdivisionGenerator::single_arm(TriangleColors::SHADED);

        for depth in 0..=8 {
            let buffer = generator.generate_new(&seed(), depth).unwrap();
            assert_eq!(buffer.triangle_count(), depth as usize + 1);
        }
    }

    #[test]
    fn test_depth_zero_single_arm_emits_input() {
        let generator = SubdivisionGenerator::single_arm(TriangleColors::SHADED);
        let buffer = generator.generate_new(&seed(), 0).unwrap();

        let tris: Vec<_> = buffer.triangles().collect();
        assert_eq!(tris, vec![seed()]);
    }

    #[test]
    fn test_depth_zero_sierpinski_emits_medial() {
        let generator = SubdivisionGenerator::sierpinski(TriangleColors::WHITE);
        let buffer = generator.generate_new(&seed(), 0).unwrap();

        let tris: Vec<_> = buffer.triangles().collect();
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].a, Vec2::new(0.25, 0.0));
        assert_eq!(tris[0].b, Vec2::new(0.0, -0.5));
        assert_eq!(tris[0].c, Vec2::new(-0.25, 0.0));
    }

    #[test]
    fn test_depth_one_sierpinski_example() {
        let generator = SubdivisionGenerator::sierpinski(TriangleColors::WHITE);
        let buffer = generator.generate_new(&seed(), 1).unwrap();

        assert_eq!(buffer.triangle_count(), 4);
        assert_eq!(buffer.len(), 12);

        let s = seed();
        let mut expected = VertexBuffer::new();
        for t in [
            s.medial(),
            s.corner_a().medial(),
            s.corner_b().medial(),
            s.corner_c().medial(),
        ] {
            expected.push_triangle(&t, &TriangleColors::WHITE);
        }

        assert_eq!(triangle_multiset(&buffer), triangle_multiset(&expected));
    }

    #[test]
    fn test_corner_medials_have_expected_vertices() {
        let generator = SubdivisionGenerator::sierpinski(TriangleColors::WHITE);
        let buffer = generator.generate_new(&seed(), 1).unwrap();
        let tris: Vec<_> = buffer.triangles().collect();

        // corner A = (0,0.5), (0.25,0), (-0.25,0)
        assert_eq!(tris[1].a, Vec2::new(0.125, 0.25));
        assert_eq!(tris[1].b, Vec2::new(0.0, 0.0));
        assert_eq!(tris[1].c, Vec2::new(-0.125, 0.25));
    }

    #[test]
    fn test_every_vertex_carries_the_configured_colors() {
        let colors = TriangleColors {
            a: [1.0, 0.0, 0.0],
            b: [0.0, 1.0, 0.0],
            c: [0.0, 0.0, 1.0],
        };
        let generator = SubdivisionGenerator::sierpinski(colors);
        let buffer = generator.generate_new(&seed(), 3).unwrap();

        for tri in buffer.vertices().chunks_exact(3) {
            assert_eq!(tri[0].color, colors.a);
            assert_eq!(tri[1].color, colors.b);
            assert_eq!(tri[2].color, colors.c);
        }
        assert!(buffer.vertices().iter().all(|v| v.position[2] == 0.0));
    }

    #[test]
    fn test_emitted_triangles_stay_inside_seed_bounds() {
        let generator = SubdivisionGenerator::sierpinski(TriangleColors::WHITE);
        let buffer = generator.generate_new(&seed(), 4).unwrap();

        for v in buffer.vertices() {
            assert!(v.position[0] >= -0.5 && v.position[0] <= 0.5);
            assert!(v.position[1] >= -0.5 && v.position[1] <= 0.5);
        }
    }

    #[test]
    fn test_negative_depth_is_invalid_argument() {
        for policy in [SubdivisionPolicy::SingleArm, SubdivisionPolicy::Sierpinski] {
            let generator = SubdivisionGenerator::new(policy, policy.default_colors());
            let mut buffer = VertexBuffer::new();

            let result = generator.generate(&seed(), -3, &mut buffer);

            assert_eq!(result, Err(SubdivisionError::InvalidDepth(-3)));
            assert!(buffer.is_empty(), "nothing emitted before rejection");
        }
    }

    #[test]
    fn test_generate_never_clears_existing_output() {
        let generator = SubdivisionGenerator::sierpinski(TriangleColors::WHITE);
        let mut buffer = VertexBuffer::new();
        buffer.push_triangle(&seed(), &TriangleColors::SHADED);

        generator.generate(&seed(), 1, &mut buffer).unwrap();

        assert_eq!(buffer.triangle_count(), 5);
        assert_eq!(buffer.triangles().next(), Some(seed()));
    }

    #[test]
    fn test_policies_are_not_equivalent() {
        let a = SubdivisionGenerator::single_arm(TriangleColors::WHITE)
            .generate_new(&seed(), 2)
            .unwrap();
        let b = SubdivisionGenerator::sierpinski(TriangleColors::WHITE)
            .generate_new(&seed(), 2)
            .unwrap();

        assert_ne!(a.triangle_count(), b.triangle_count());
        assert_ne!(a.triangles().next(), b.triangles().next());
    }

    #[test]
    fn test_midpoint_symmetry() {
        let points = [
            Vec2::new(0.0, 0.5),
            Vec2::new(-0.33, 0.71),
            Vec2::new(1e-3, -4.0),
            Vec2::new(123.5, -0.0625),
        ];
        for &p in &points {
            for &q in &points {
                assert_eq!(midpoint(p, q), midpoint(q, p));
            }
        }
    }
}
