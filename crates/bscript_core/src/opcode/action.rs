//! Action scripts drive per-character behaviour: animation, collision and AI policy.

use super::{ArgSpec, OpcodeInfo};

/// First value past the table; never a real instruction.
pub const SENTINEL: u16 = 0x49;

pub(super) static OPCODES: [OpcodeInfo; SENTINEL as usize] = [
    // 0x00
    OpcodeInfo::new("Start", &[]),
    OpcodeInfo::new("End", &[]),
    OpcodeInfo::new("Loop", &[]),
    OpcodeInfo::new("Pause", &[]),
    OpcodeInfo::new("Jump", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("Print", &[ArgSpec::string("message", 4)]),
    OpcodeInfo::new("Assert", &[]),
    OpcodeInfo::new("ResetFrame", &[]),
    OpcodeInfo::new("Call", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("CallUserProgram", &[ArgSpec::u16("number", 4)]),
    OpcodeInfo::new("SetUserValue", &[ArgSpec::f32("value", 4)]),
    OpcodeInfo::new("ChangeAction", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new(
        "Animation",
        &[
            ArgSpec::f32("interpolateTime", 4),
            ArgSpec::u16("animationNumber", 8),
            ArgSpec::u16("startFrame", 10),
            ArgSpec::u16("animationType", 12),
        ],
    ),
    OpcodeInfo::new(
        "AnimationWithoutSameNumber",
        &[
            ArgSpec::f32("interpolateTime", 4),
            ArgSpec::u16("animationNumber", 8),
            ArgSpec::u16("startFrame", 10),
            ArgSpec::u16("animationType", 12),
        ],
    ),
    OpcodeInfo::new("AnimationByUserValue", &[ArgSpec::f32("interpolateTime", 4)]),
    OpcodeInfo::new("AnimationFrame", &[ArgSpec::f32("frame", 4)]),
    // 0x10
    OpcodeInfo::new("WaitAnimation", &[ArgSpec::f32("value", 4)]),
    OpcodeInfo::new(
        "JumpIfAnimationNumber",
        &[
            ArgSpec::u16("compareType", 4),
            ArgSpec::u16("animationNumber", 6),
            ArgSpec::u16("targetLabel", 8),
        ],
    ),
    OpcodeInfo::new(
        "FacialNumber",
        &[
            ArgSpec::u16("facialTarget", 4),
            ArgSpec::u16("number", 6),
            ArgSpec::f32("interpolateTime", 8),
        ],
    ),
    OpcodeInfo::new(
        "FacialAnimation",
        &[ArgSpec::u16("facialTarget", 4), ArgSpec::u16("number", 6)],
    ),
    OpcodeInfo::new(
        "AnimationWithEclipse",
        &[
            ArgSpec::f32("interpolateTime", 4),
            ArgSpec::u16("animationNumber", 8),
            ArgSpec::u16("animationNumberOfEclipse", 10),
            ArgSpec::u16("startFrame", 12),
            ArgSpec::u16("animationType", 14),
        ],
    ),
    OpcodeInfo::new(
        "AnimationWithoutSameNumberWithEclipse",
        &[
            ArgSpec::f32("interpolateTime", 4),
            ArgSpec::u16("animationNumber", 8),
            ArgSpec::u16("animationNumberOfEclipse", 10),
            ArgSpec::u16("startFrame", 12),
            ArgSpec::u16("animationType", 14),
        ],
    ),
    OpcodeInfo::new("SetOnGround", &[ArgSpec::f32("underY", 4), ArgSpec::f32("offsetDegreeY", 8)]),
    OpcodeInfo::new("EnableObjectCollision", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new(
        "SetObjectCollisionSphere",
        &[
            ArgSpec::f32("radius", 4),
            ArgSpec::f32("offsetToCenterX", 8),
            ArgSpec::f32("offsetToCenterY", 12),
            ArgSpec::f32("offsetToCenterZ", 16),
        ],
    ),
    OpcodeInfo::new(
        "SetObjectCollisionSegment",
        &[
            ArgSpec::f32("radius", 4),
            ArgSpec::f32("v0x", 8),
            ArgSpec::f32("v0y", 12),
            ArgSpec::f32("v0z", 16),
            ArgSpec::f32("v1x", 20),
            ArgSpec::f32("v1y", 24),
            ArgSpec::f32("v1z", 28),
        ],
    ),
    OpcodeInfo::new("InvincibilityTime", &[ArgSpec::f32("time", 4)]),
    OpcodeInfo::new("HitPoint", &[ArgSpec::f32("value", 4)]),
    OpcodeInfo::new("IsStillAlive", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("IsNotStillAlive", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("IsNoDamage", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("IsResistCapture", &[ArgSpec::u16("bool", 4)]),
    // 0x20
    OpcodeInfo::new("IsRideable", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new("IsDangleable", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new("IsGiant", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new("EnableNockBack", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new("EnableThroughEnemy", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new("NoDamage", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new("IsTranslucent", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new("SetPathBindPolicy", &[ArgSpec::u16("policy", 4)]),
    OpcodeInfo::new("SetGroundCheckPolicy", &[ArgSpec::u16("policy", 4)]),
    OpcodeInfo::new("SetLookAtPolicy", &[ArgSpec::u16("policy", 4)]),
    OpcodeInfo::new("SetRotatePolicy", &[ArgSpec::u16("policy", 4)]),
    OpcodeInfo::new(
        "JumpIfActionMode",
        &[ArgSpec::u16("compareType", 4), ArgSpec::u16("value", 6), ArgSpec::u16("label", 8)],
    ),
    OpcodeInfo::new(
        "WaitIfActionMode",
        &[ArgSpec::u16("compareType", 4), ArgSpec::u16("value", 6)],
    ),
    OpcodeInfo::new("SetActionMode", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("AddActionMode", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("PlayerIfEnemyCaptured", &[ArgSpec::u16("label", 4)]),
    // 0x30
    OpcodeInfo::new("PlayerIfNotEnemyCaptured", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("PlayerIfDangling", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("PlayerIfNotDangling", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("PlayerIfOnSlideFloor", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("PlayerIfNotOnSlideFloor", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("PlayerIfReservedContinuousJump", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("PlayerIfNotReservedContinuousJump", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new(
        "PlayerIfNotReservedIdleAnimation",
        &[ArgSpec::u16("idleActionNumber", 4), ArgSpec::u16("label", 6)],
    ),
    OpcodeInfo::new("PlayerStartJump", &[]),
    OpcodeInfo::new("PlayerShootEnemy", &[ArgSpec::u16("direction", 4)]),
    OpcodeInfo::new("PlayerStartKazedama", &[]),
    OpcodeInfo::new("PlayerToAngle", &[ArgSpec::u16("direction", 4)]),
    OpcodeInfo::new("PlayerStartEffectOfRun", &[]),
    OpcodeInfo::new("EnemyFireBullet", &[]),
    OpcodeInfo::new("SoundEffect", &[ArgSpec::u16("effectNumber", 4), ArgSpec::u16("range", 6)]),
    OpcodeInfo::new("SoundEffect2D", &[ArgSpec::u16("effectNumber", 4)]),
    // 0x40
    OpcodeInfo::new(
        "StartEffect",
        &[
            ArgSpec::u16("effectNumber", 4),
            ArgSpec::u16("onGround", 6),
            ArgSpec::f32("offX", 8),
            ArgSpec::f32("offY", 12),
            ArgSpec::f32("offZ", 16),
            ArgSpec::f32("scale", 20),
            ArgSpec::u16("withoutRotate", 24),
            ArgSpec::u16("drawPriority", 26),
            ArgSpec::f32("roll", 28),
        ],
    ),
    OpcodeInfo::new(
        "StartEffectWithBoneId",
        &[
            ArgSpec::u16("effectNumber", 4),
            ArgSpec::u16("onGround", 6),
            ArgSpec::f32("scale", 8),
            ArgSpec::u16("boneNumber", 12),
            ArgSpec::u16("withoutRotate", 14),
            ArgSpec::u16("drawPriority", 16),
        ],
    ),
    OpcodeInfo::new(
        "StartEffectWithBoneName",
        &[
            ArgSpec::u16("effectNumber", 4),
            ArgSpec::u16("onGround", 6),
            ArgSpec::f32("scale", 8),
            ArgSpec::string("boneName", 12),
            ArgSpec::u16("withoutRotate", 16),
            ArgSpec::u16("drawPriority", 18),
        ],
    ),
    OpcodeInfo::new("ShakePlayerCamera", &[ArgSpec::f32("power", 4), ArgSpec::f32("duration", 8)]),
    OpcodeInfo::new("Vibration", &[ArgSpec::u16("time", 4)]),
    OpcodeInfo::new("B00ApplyTranslateFromNode", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new(
        "B03Animation",
        &[
            ArgSpec::f32("interpolateTime", 4),
            ArgSpec::u16("rAnimationNumber", 8),
            ArgSpec::u16("lAnimationNumber", 10),
            ArgSpec::u16("startFrame", 12),
            ArgSpec::u16("animationType", 14),
        ],
    ),
    OpcodeInfo::new("B05FootEffect", &[ArgSpec::u16("isRightSide", 4)]),
    OpcodeInfo::new(
        "B06Animation",
        &[
            ArgSpec::f32("interpolateTime", 4),
            ArgSpec::f32("playRate", 8),
            ArgSpec::u16("rAnimationNumber", 12),
            ArgSpec::u16("lAnimationNumber", 14),
            ArgSpec::u16("startFrame", 16),
            ArgSpec::u16("animationType", 18),
        ],
    ),
];
