use super::*;
use crate::config::Engine;

fn disk(radius: i64, pad: i64) -> BooleanGrid {
  let size = (2 * (radius + pad)) as usize;
  let center = radius + pad;
  let mut g = BooleanGrid::filled(size, size, false).unwrap();
  for y in 0..size as i64 {
    for x in 0..size as i64 {
      let (dx, dy) = (x - center, y - center);
      if dx * dx + dy * dy <= radius * radius {
        g.set(x as usize, y as usize, true);
      }
    }
  }
  g
}

#[test]
fn all_interior_grid_is_uniformly_zero() {
  let grid = BooleanGrid::filled(6, 6, true).unwrap();
  let sdf = compute(&grid, &EngineConfig::default()).unwrap();
  assert!(sdf.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn all_exterior_grid_is_uniformly_zero() {
  let grid = BooleanGrid::filled(6, 6, false).unwrap();
  let sdf = compute(&grid, &EngineConfig::default()).unwrap();
  assert!(sdf.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn boundary_cells_have_equal_magnitude_across_the_interior_edge() {
  let grid = disk(10, 4);
  let sdf = compute(&grid, &EngineConfig::default()).unwrap();
  for y in 0..grid.height() {
    for x in 0..grid.width() {
      let sign = if *grid.get(x, y) { -1.0 } else { 1.0 };
      assert!(sdf.get(x, y).signum() == sign || *sdf.get(x, y) == 0.0);
    }
  }
}

#[test]
fn all_three_engines_agree_on_a_disk() {
  let grid = disk(8, 3);
  let brute = compute(&grid, &EngineConfig::new().with_engine(Engine::Brute)).unwrap();
  let brushfire = compute(&grid, &EngineConfig::new().with_engine(Engine::Brushfire)).unwrap();
  let linear = compute(&grid, &EngineConfig::new().with_engine(Engine::Linear)).unwrap();
  for i in 0..brute.as_slice().len() {
    assert!((brute.as_slice()[i] - brushfire.as_slice()[i]).abs() < 1e-6);
    assert!((brute.as_slice()[i] - linear.as_slice()[i]).abs() < 1e-6);
  }
}

#[test]
fn parallel_and_serial_composition_agree() {
  let grid = disk(12, 4);
  let serial = compute(&grid, &EngineConfig::new().with_parallel(false)).unwrap();
  let parallel = compute(&grid, &EngineConfig::new().with_parallel(true)).unwrap();
  for i in 0..serial.as_slice().len() {
    assert!((serial.as_slice()[i] - parallel.as_slice()[i]).abs() < 1e-9);
  }
}

#[test]
fn thread_count_builds_a_scoped_pool_and_still_agrees_with_the_default() {
  let grid = disk(10, 4);
  let default = compute(&grid, &EngineConfig::default()).unwrap();
  for threads in [1, 2, 4] {
    let bounded = compute(&grid, &EngineConfig::new().with_thread_count(threads)).unwrap();
    for i in 0..default.as_slice().len() {
      assert!(
        (default.as_slice()[i] - bounded.as_slice()[i]).abs() < 1e-9,
        "thread_count={threads} index {i}"
      );
    }
  }
}

#[test]
fn linear_matches_brute_across_disk_radii() {
  for radius in [1, 2, 4, 8, 13, 20] {
    let grid = disk(radius, 3);
    let brute = compute(&grid, &EngineConfig::new().with_engine(Engine::Brute)).unwrap();
    let linear = compute(&grid, &EngineConfig::new().with_engine(Engine::Linear)).unwrap();
    for i in 0..brute.as_slice().len() {
      assert!(
        (brute.as_slice()[i] - linear.as_slice()[i]).abs() < 1e-6,
        "radius {radius} index {i}: brute={} linear={}",
        brute.as_slice()[i],
        linear.as_slice()[i]
      );
    }
  }
}
