// Tests for pointviz configuration
//
// Tests for Config, Style and RenderSurface construction through the builder
// pattern, and for the reference scenario tying configuration to mapping.

#[cfg(test)]
mod tests {
    use crate::controller::{Command, Controller};
    use crate::error::VizError;
    use crate::mapper::CoordinateMapper;
    use crate::options::{
        Config, DEFAULT_POINT_COUNT, MAX_POINT_COUNT, MAX_RADIUS, MIN_POINT_COUNT, MIN_RADIUS,
    };
    use crate::types::{ColorPreset, Domain, Point, RenderSurface, Style};
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // ============================================================================
    // Config Tests
    // ============================================================================

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.count, 30);
        assert_eq!(config.domain, Domain::new(0.0, 100.0, 0.0, 100.0).unwrap());
        assert_eq!(config.surface, RenderSurface::new(600.0, 400.0, 20.0).unwrap());
        assert_eq!(config.style.radius(), 3.0);
        assert_eq!(config.style.color(), ColorPreset::Blue.rgb());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .count(150)
            .domain(Domain::new(-5.0, 5.0, -1.0, 1.0).unwrap())
            .style(Style::new(6.0, ColorPreset::Green).unwrap())
            .surface(RenderSurface::new(1024.0, 768.0, 16.0).unwrap())
            .build()
            .unwrap();

        assert_eq!(config.count, 150);
        assert_eq!(config.domain.min_x(), -5.0);
        assert_eq!(config.style.radius(), 6.0);
        assert_eq!(config.surface.width(), 1024.0);
    }

    #[test]
    fn test_config_builder_partial() {
        // Test that we can set only some fields
        let config = Config::new().count(7).build().unwrap();

        assert_eq!(config.count, 7);
        // Other fields should use defaults
        assert_eq!(config.domain, Domain::default());
        assert_eq!(config.style, Style::default());
        assert_eq!(config.surface, RenderSurface::default());
    }

    #[test]
    fn test_config_builder_rejects_unchecked_domain() {
        let result = Config::new()
            .domain(Domain::new_unchecked(3.0, 1.0, 0.0, 1.0))
            .build();
        assert!(matches!(result, Err(VizError::InvalidDomain { .. })));
    }

    #[test]
    fn test_slider_limits_are_consistent() {
        assert!(MIN_POINT_COUNT <= DEFAULT_POINT_COUNT && DEFAULT_POINT_COUNT <= MAX_POINT_COUNT);
        assert!(MIN_RADIUS <= Style::default().radius() && Style::default().radius() <= MAX_RADIUS);
        assert_eq!(MIN_RADIUS * 2.0, 2.0);
        assert_eq!(MAX_RADIUS * 2.0, 15.0);
    }

    // ============================================================================
    // Reference Scenario Tests
    // ============================================================================

    #[test]
    fn test_reference_scenario_through_config() {
        let config = Config::default();
        let mapper = CoordinateMapper::new(&config.domain, &config.surface).unwrap();
        let corner = mapper.to_canvas(Point::new(50.0, 50.0), config.style.radius());

        // 300 and 200 minus half of the 6 px point size
        assert_relative_eq!(corner.x, 297.0, epsilon = 1e-3);
        assert_relative_eq!(corner.y, 197.0, epsilon = 1e-3);
    }

    #[test]
    fn test_rejected_domain_leaves_generated_points_alone() {
        let mut controller = Controller::new(Config::default(), StdRng::seed_from_u64(5));
        controller.apply(Command::Generate).unwrap();
        let points = controller.points().to_vec();

        let result = controller.apply(Command::SetDomain {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 100.0,
        });
        assert!(result.is_err());
        assert_eq!(controller.points(), &points[..]);
        assert_eq!(controller.config().domain, Domain::default());
    }
}
