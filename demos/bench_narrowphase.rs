use phosphaze_collision::*;
use std::time::Instant;

fn main() {
    let n = 1_000_000u32;
    let table = Dispatcher::default();
    let b = AaRect::new(0.0, 0.0, 1.0, 1.0);

    let mut hits = 0u32;
    let start = Instant::now();
    for i in 0..n {
        let t = (i as f64) * 0.001;
        let a = AaRect::new(t.sin() * 2.0, t.cos() * 2.0, 1.0, 1.0);
        if let Ok(Some(_)) = a.collide(&b) {
            hits += 1;
        }
    }
    println!("AaRect::collide {} iters in {:?} hits={}", n, start.elapsed(), hits);

    let mut hits = 0u32;
    let start = Instant::now();
    for i in 0..n {
        let t = (i as f64) * 0.001;
        let a = AaRect::new(t.sin() * 2.0, t.cos() * 2.0, 1.0, 1.0);
        if let Ok(Some(_)) = table.collide(&a, &b) {
            hits += 1;
        }
    }
    println!("Dispatcher::collide {} iters in {:?} hits={}", n, start.elapsed(), hits);
}
