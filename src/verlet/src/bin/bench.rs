use rand::Rng;
use std::time::SystemTime;
use tracing_subscriber::filter::LevelFilter;
use verlet::pworld::PWorld;
use verlet::V2;

// w x h cloth hanging from its top row, slightly jittered so it never
// starts in perfect equilibrium
fn init_cloth(pworld: &mut PWorld, w: usize, h: usize) -> verlet::Result<()> {
	let mut rng = rand::thread_rng();
	let spacing = 0.2;
	let mut handles = Vec::with_capacity(w * h);
	for y in 0..h {
		for x in 0..w {
			let jitter = V2::new(
				rng.gen_range(-0.01..0.01),
				rng.gen_range(-0.01..0.01),
			);
			let pos = V2::new(x as f32 * spacing, -(y as f32) * spacing);
			handles.push(pworld.add_point(pos + jitter)?);
		}
	}
	for &top in &handles[..w] {
		pworld.toggle_lock(top)?;
	}
	for y in 0..h {
		for x in 0..w {
			let p = handles[y * w + x];
			if x + 1 < w {
				pworld.add_constraint(p, handles[y * w + x + 1])?;
			}
			if y + 1 < h {
				pworld.add_constraint(p, handles[(y + 1) * w + x])?;
			}
		}
	}
	Ok(())
}

fn main() -> verlet::Result<()> {
	tracing_subscriber::fmt()
		.with_max_level(LevelFilter::INFO)
		.init();
	let mut pworld = PWorld::default().with_iteration(20);
	init_cloth(&mut pworld, 40, 30)?;
	pworld.start();
	let rframes = 600;
	let start = SystemTime::now();
	for _ in 0..rframes {
		pworld.step();
	}
	let time = rframes as f32 * pworld.dt;
	let duration = SystemTime::now()
		.duration_since(start)
		.map(|d| d.as_micros())
		.unwrap_or_default();
	log::info!("{:?}", pworld.update_info());
	log::info!("load {:.3}%", duration as f32 / time / 1e4);
	Ok(())
}
