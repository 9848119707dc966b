use glam::DVec2;
use phosphaze_collision::*;

fn main() -> Result<(), CollisionError> {
    env_logger::init();

    let table = Dispatcher::with_builtin(CollisionConfig {
        boundary: BoundaryRule::Legacy,
    });

    let player = AaRect::new(100.0, 400.0, 24.0, 32.0);
    let bullets = [
        AaRect::square_at(110.0, 390.0, 4.0),
        AaRect::square_at(124.0, 410.0, 4.0),
        AaRect::square_at(300.0, 120.0, 4.0),
        // resting exactly on the player's head
        AaRect::new(100.0, 396.0, 24.0, 4.0),
    ];
    let wall = AaRect::try_from(vec![0.0, 432.0, 800.0, 8.0])?;

    println!("player={:?} corners={:?}", player.as_rectangle(), player.corners());

    for (i, bullet) in bullets.iter().enumerate() {
        match table.collide(&player, bullet) {
            Ok(Some(ctx)) => println!("Hit: bullet {} vs {:?}", i, ctx.a()),
            Ok(None) => println!("Miss: bullet {}", i),
            Err(e) => println!("Error: {}", e),
        }
    }

    // player.y + player.h == wall.y: the legacy rule reports no contact from above
    match player.collide(&wall) {
        Ok(ctx) => println!("player vs wall: {}", ctx.is_some()),
        Err(e) => println!("Error: {}", e),
    }
    match wall.collide(&player) {
        Ok(ctx) => println!("wall vs player: {}", ctx.is_some()),
        Err(e) => println!("Error: {}", e),
    }

    let cursor = DVec2::new(112.0, 420.0);
    println!(
        "cursor over player: {}",
        narrowphase::Narrowphase::overlap_point_rect(cursor, &player)
    );

    Ok(())
}
