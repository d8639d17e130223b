//! Audio and animation requests issued by the player, checked with mocks.

use glam::Vec2;
use mockall::predicate::eq;
use mockall::{mock, Sequence};
use skulk::effects::{AnimationSink, AudioSink, Effects, SoundHandle};
use skulk::scene::NodeId;
use skulk::{InputSnapshot, PlayerController, Simulation, WorldEntity, JUMP_SOUND};
use test_utils::press;

mock! {
    pub Audio {}
    impl AudioSink for Audio {
        fn play_one_shot(&mut self, name: &str);
        fn play_looping(&mut self, name: &str) -> SoundHandle;
        fn stop(&mut self, handle: SoundHandle);
    }
}

mock! {
    pub Animation {}
    impl AnimationSink for Animation {
        fn set_active_animation(&mut self, node: NodeId, name: &str);
    }
}

fn lone_player() -> (Simulation, NodeId) {
    let mut sim = Simulation::default();
    let player = sim
        .spawn(
            "Player",
            WorldEntity::player(Vec2::ZERO, Vec2::splat(10.0), PlayerController::default()),
        )
        .expect("spawn player");
    (sim, player)
}

fn run(
    sim: &mut Simulation,
    inputs: &[InputSnapshot],
    audio: &mut MockAudio,
    animation: &mut MockAnimation,
) {
    let mut fx = Effects::new(audio, animation);
    for input in inputs {
        sim.tick(0.1, input, &mut fx);
    }
}

#[test]
fn holding_jump_plays_the_jump_sound_once() {
    let (mut sim, player) = lone_player();
    let mut audio = MockAudio::new();
    audio
        .expect_play_one_shot()
        .with(eq(JUMP_SOUND))
        .times(1)
        .return_const(());
    audio.expect_play_looping().never();
    let mut animation = MockAnimation::new();
    animation
        .expect_set_active_animation()
        .with(eq(player), eq("jump"))
        .times(1)
        .return_const(());

    let jump = press(|i| i.jump = true);
    run(&mut sim, &[jump, jump, jump], &mut audio, &mut animation);
}

#[test]
fn gait_changes_swap_the_footstep_loop() {
    let (mut sim, player) = lone_player();
    let mut seq = Sequence::new();
    let mut audio = MockAudio::new();
    audio
        .expect_play_looping()
        .with(eq("walk"))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(SoundHandle(7));
    audio
        .expect_stop()
        .with(eq(SoundHandle(7)))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    audio
        .expect_play_looping()
        .with(eq("run"))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(SoundHandle(8));
    audio
        .expect_stop()
        .with(eq(SoundHandle(8)))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut animation = MockAnimation::new();
    animation
        .expect_set_active_animation()
        .with(eq(player), eq("walk"))
        .times(2)
        .return_const(());
    animation
        .expect_set_active_animation()
        .with(eq(player), eq("idle"))
        .times(1)
        .return_const(());

    let walk = press(|i| i.right = true);
    let sprint = press(|i| {
        i.right = true;
        i.run = true;
    });
    run(
        &mut sim,
        &[walk, walk, sprint, InputSnapshot::default()],
        &mut audio,
        &mut animation,
    );
}

#[test]
fn standing_still_requests_nothing() {
    let (mut sim, _) = lone_player();
    let mut audio = MockAudio::new();
    audio.expect_play_one_shot().never();
    audio.expect_play_looping().never();
    audio.expect_stop().never();
    let mut animation = MockAnimation::new();
    animation.expect_set_active_animation().never();

    run(
        &mut sim,
        &[InputSnapshot::default(); 5],
        &mut audio,
        &mut animation,
    );
}
