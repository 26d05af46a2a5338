//! Field scripts drive stage logic: gimmicks, enemies, portals and events.

use super::{ArgSpec, OpcodeInfo};

/// First value past the table; never a real instruction.
pub const SENTINEL: u16 = 0x1C7;

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
    OpcodeInfo::new("JumpToNextLabel", &[]),
    OpcodeInfo::new("LoopTo", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("AddCharacterResource", &[ArgSpec::u16("characterID", 4)]),
    OpcodeInfo::new("DeclareSystem", &[]),
    OpcodeInfo::new(
        "DeclarePortal",
        &[
            ArgSpec::u16("characterID", 4),
            ArgSpec::u16("intoDirection", 6),
            ArgSpec::u16("comeOutDirection", 8),
            ArgSpec::u16("dstField", 10),
            ArgSpec::u16("dstPortal", 12),
            ArgSpec::u16("portalMoveEffect", 14),
            ArgSpec::u16("onFloor", 16),
        ],
    ),
    OpcodeInfo::new(
        "DeclareGimmick",
        &[ArgSpec::u16("characterID", 4), ArgSpec::u16("enableShadow", 6)],
    ),
    OpcodeInfo::new(
        "DeclareEnemy",
        &[ArgSpec::u16("characterID", 4), ArgSpec::u16("eclipseCharacterID", 6)],
    ),
    // 0x10
    OpcodeInfo::new(
        "DeclareEvent",
        &[ArgSpec::f32("collisionRadius", 4), ArgSpec::u16("enableInterference", 8)],
    ),
    OpcodeInfo::new("CreateControlPoins", &[ArgSpec::u16("num", 4)]),
    OpcodeInfo::new(
        "SetControlPoint",
        &[
            ArgSpec::u16("number", 4),
            ArgSpec::u16("pathNumber", 6),
            ArgSpec::u16("pathBindPolicy", 8),
            ArgSpec::u16("groundCheckPolicy", 10),
            ArgSpec::f32("x", 12),
            ArgSpec::f32("y", 16),
            ArgSpec::f32("z", 20),
        ],
    ),
    OpcodeInfo::new("CreateSleepProhibitionPolicies", &[ArgSpec::u16("num", 4)]),
    OpcodeInfo::new(
        "SetSleepProhibitionPolicy",
        &[
            ArgSpec::u16("number", 4),
            ArgSpec::u16("pathNumber", 6),
            ArgSpec::f32("pathDistanceFrom", 8),
            ArgSpec::f32("pathDistanceTo", 12),
        ],
    ),
    OpcodeInfo::new("SetResetLabel", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("SetPathNumber", &[ArgSpec::u16("pathNumber", 4)]),
    OpcodeInfo::new("SetPosition", &[ArgSpec::u16("point0", 4)]),
    OpcodeInfo::new(
        "SetPositionDirect",
        &[ArgSpec::f32("x", 4), ArgSpec::f32("y", 8), ArgSpec::f32("z", 12)],
    ),
    OpcodeInfo::new(
        "SetRotationDirect",
        &[ArgSpec::f32("x", 4), ArgSpec::f32("y", 8), ArgSpec::f32("z", 12)],
    ),
    OpcodeInfo::new(
        "SetRotateSpeed",
        &[ArgSpec::f32("x", 4), ArgSpec::f32("y", 8), ArgSpec::f32("z", 12)],
    ),
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
    OpcodeInfo::new("WaitAnimation", &[ArgSpec::f32("value", 4)]),
    OpcodeInfo::new("UpdateModelRate", &[ArgSpec::f32("rate", 4)]),
    OpcodeInfo::new("IsTranslucent", &[ArgSpec::u16("bool", 4)]),
    // 0x20
    OpcodeInfo::new("SetPathBindPolicy", &[ArgSpec::u16("policy", 4)]),
    OpcodeInfo::new("SetGroundCheckPolicy", &[ArgSpec::u16("policy", 4)]),
    OpcodeInfo::new("SetLookAtPolicy", &[ArgSpec::u16("policy", 4)]),
    OpcodeInfo::new("SetThroughEnemy", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("UpdateContinuePoint", &[ArgSpec::u16("force", 4)]),
    OpcodeInfo::new("EnableUpdateShadow", &[ArgSpec::u16("object", 4), ArgSpec::u16("lS", 6)]),
    OpcodeInfo::new("SetResistCapture", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new("EnableWaterSurfaceHeight", &[ArgSpec::f32("height", 4)]),
    OpcodeInfo::new("DisableWaterSurfaceHeight", &[]),
    OpcodeInfo::new("ResetPathPoint", &[ArgSpec::u16("searchXZ", 4)]),
    OpcodeInfo::new("CreateSimpleObjects", &[ArgSpec::u16("num", 4)]),
    OpcodeInfo::new(
        "AddSimpleItem",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::u16("pathNumber", 20),
            ArgSpec::u16("isTranslucent", 22),
            ArgSpec::f32("sleepDistance", 24),
            ArgSpec::u16("effectPriority", 28),
            ArgSpec::u16("shadowStatus", 30),
        ],
    ),
    OpcodeInfo::new(
        "AddResidentItem",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::u16("pathNumber", 20),
            ArgSpec::u16("isTranslucent", 22),
            ArgSpec::f32("zoomRate", 24),
            ArgSpec::f32("scaleRate", 28),
        ],
    ),
    OpcodeInfo::new(
        "AddSimpleDropItem",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::f32("frontSpeed", 8),
            ArgSpec::f32("powerY", 12),
            ArgSpec::f32("speedY", 16),
            ArgSpec::u16("isTranslucent", 20),
            ArgSpec::u16("useShadow", 22),
        ],
    ),
    OpcodeInfo::new(
        "AddItemToJump",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::u16("isTranslucent", 20),
            ArgSpec::u16("frames", 22),
            ArgSpec::f32("toX", 24),
            ArgSpec::f32("toY", 28),
            ArgSpec::f32("toZ", 32),
            ArgSpec::f32("height", 36),
            ArgSpec::f32("boundSpeed", 40),
        ],
    ),
    OpcodeInfo::new("WaitLastItemCaught", &[]),
    // 0x30
    OpcodeInfo::new(
        "AddSimpleEffect",
        &[
            ArgSpec::f32("x", 4),
            ArgSpec::f32("y", 8),
            ArgSpec::f32("z", 12),
            ArgSpec::f32("rX", 16),
            ArgSpec::f32("rY", 20),
            ArgSpec::f32("rZ", 24),
            ArgSpec::f32("scale", 28),
            ArgSpec::u16("effectID", 32),
            ArgSpec::u16("startFrame", 34),
            ArgSpec::u16("drawPriority", 36),
            ArgSpec::u16("radius", 38),
        ],
    ),
    OpcodeInfo::new(
        "AddScreenEffect",
        &[
            ArgSpec::f32("depth", 4),
            ArgSpec::u16("effectID", 8),
            ArgSpec::u16("startFrame", 10),
            ArgSpec::u16("drawPriority", 12),
            ArgSpec::u16("rX", 14),
            ArgSpec::u16("rY", 16),
            ArgSpec::u16("rZ", 18),
        ],
    ),
    OpcodeInfo::new(
        "DelSimpleEffect",
        &[ArgSpec::u16("effectID", 4), ArgSpec::u16("killEmitterOnly", 6)],
    ),
    OpcodeInfo::new("Activate", &[]),
    OpcodeInfo::new("Inactivate", &[]),
    OpcodeInfo::new("ActivateWithSealMode", &[]),
    OpcodeInfo::new("InactivateEnemySilent", &[]),
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
    OpcodeInfo::new("AllowSleep", &[ArgSpec::u16("bool", 4)]),
    OpcodeInfo::new("SleepDistance", &[ArgSpec::f32("distance", 4)]),
    OpcodeInfo::new("WaitDistanceFromPlayer", &[ArgSpec::f32("distance", 4)]),
    OpcodeInfo::new("WaitDistanceFromPlayerXZ", &[ArgSpec::f32("distance", 4)]),
    OpcodeInfo::new(
        "JumpIfPlayerComeToPath",
        &[ArgSpec::u16("pathNumber", 4), ArgSpec::u16("label", 6)],
    ),
    OpcodeInfo::new("WaitPlayerComeToPath", &[ArgSpec::u16("pathNumber", 4)]),
    // 0x40
    OpcodeInfo::new("WaitHitToPlayer", &[ArgSpec::u16("withCapturingTarget", 4)]),
    OpcodeInfo::new("WaitNoHitToPlayer", &[ArgSpec::u16("withCapturingTarget", 4)]),
    OpcodeInfo::new("WaitHitToThrownEnemy", &[]),
    OpcodeInfo::new("WaitNoHitToThrownEnemy", &[]),
    OpcodeInfo::new("WaitPlayerOnGround", &[]),
    OpcodeInfo::new(
        "JumpIfDistanceFromPlayer",
        &[ArgSpec::f32("distance", 4), ArgSpec::u16("compareType", 8), ArgSpec::u16("label", 10)],
    ),
    OpcodeInfo::new(
        "WaitIfDistanceFromPlayer",
        &[ArgSpec::f32("distance", 4), ArgSpec::u16("compareType", 8)],
    ),
    OpcodeInfo::new(
        "JumpIfPathFromPlayer",
        &[
            ArgSpec::u16("diff", 4),
            ArgSpec::u16("pathNumber", 6),
            ArgSpec::u16("compareType", 8),
            ArgSpec::u16("label", 10),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfPathFromPlayer",
        &[ArgSpec::u16("diff", 4), ArgSpec::u16("pathNumber", 6), ArgSpec::u16("compareType", 8)],
    ),
    OpcodeInfo::new(
        "JumpIfDetailPathFromPlayer",
        &[
            ArgSpec::f32("pathRate", 4),
            ArgSpec::u16("pathNumber", 8),
            ArgSpec::u16("compareType", 10),
            ArgSpec::u16("label", 12),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfDetailPathFromPlayer",
        &[
            ArgSpec::f32("pathRate", 4),
            ArgSpec::u16("pathNumber", 8),
            ArgSpec::u16("compareType", 10),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfDetailPathFromEnemy",
        &[
            ArgSpec::f32("pathRate", 4),
            ArgSpec::u16("pathNumber", 8),
            ArgSpec::u16("compareType", 10),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfPlayerInsideOfPath",
        &[
            ArgSpec::f32("pathRate0", 4),
            ArgSpec::f32("pathRate1", 8),
            ArgSpec::u16("pathNumber", 12),
        ],
    ),
    OpcodeInfo::new(
        "JumpIfPlayerInsideOfPath",
        &[
            ArgSpec::f32("pathRate0", 4),
            ArgSpec::f32("pathRate1", 8),
            ArgSpec::u16("pathNumber", 12),
            ArgSpec::u16("label", 14),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfPlayerOutsideOfPath",
        &[
            ArgSpec::f32("pathRate0", 4),
            ArgSpec::f32("pathRate1", 8),
            ArgSpec::u16("pathNumber", 12),
        ],
    ),
    OpcodeInfo::new(
        "JumpIfPlayerOutsideOfPath",
        &[
            ArgSpec::f32("pathRate0", 4),
            ArgSpec::f32("pathRate1", 8),
            ArgSpec::u16("pathNumber", 12),
            ArgSpec::u16("label", 14),
        ],
    ),
    // 0x50
    OpcodeInfo::new(
        "JumpIfDestroyEnemy",
        &[ArgSpec::u16("enemyLabel", 4), ArgSpec::u16("active", 6), ArgSpec::u16("label", 8)],
    ),
    OpcodeInfo::new(
        "PlaySEInArea",
        &[ArgSpec::f32("playRange", 4), ArgSpec::f32("stopRange", 8), ArgSpec::u16("number", 12)],
    ),
    OpcodeInfo::new(
        "JumpIfFrameCounter",
        &[ArgSpec::f32("frame", 4), ArgSpec::u16("compareType", 8), ArgSpec::u16("label", 10)],
    ),
    OpcodeInfo::new(
        "WaitIfFrameCounter",
        &[ArgSpec::f32("frame", 4), ArgSpec::u16("compareType", 8)],
    ),
    OpcodeInfo::new(
        "JumpIfCharacterID",
        &[ArgSpec::u16("characterID", 4), ArgSpec::u16("compareType", 6), ArgSpec::u16("label", 8)],
    ),
    OpcodeInfo::new("WaitInactivation", &[]),
    OpcodeInfo::new(
        "JumpIfKnockOutCount",
        &[ArgSpec::u16("count", 4), ArgSpec::u16("compareType", 6), ArgSpec::u16("label", 8)],
    ),
    OpcodeInfo::new(
        "WaitIfKnockOutCount",
        &[ArgSpec::u16("count", 4), ArgSpec::u16("compareType", 6)],
    ),
    OpcodeInfo::new(
        "JumpIfPathOn",
        &[
            ArgSpec::u16("diff", 4),
            ArgSpec::u16("pathNumber", 6),
            ArgSpec::u16("compareType", 8),
            ArgSpec::u16("label", 10),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfPathOn",
        &[ArgSpec::u16("diff", 4), ArgSpec::u16("pathNumber", 6), ArgSpec::u16("compareType", 8)],
    ),
    OpcodeInfo::new(
        "JumpIfAction",
        &[
            ArgSpec::u16("actionNumber", 4),
            ArgSpec::u16("compareType", 6),
            ArgSpec::u16("label", 8),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfAction",
        &[ArgSpec::u16("actionNumber", 4), ArgSpec::u16("compareType", 6)],
    ),
    OpcodeInfo::new(
        "JumpIfEnemyStatus",
        &[
            ArgSpec::u16("enemyStatusNumber", 4),
            ArgSpec::u16("compareType", 6),
            ArgSpec::u16("label", 8),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfEnemyStatus",
        &[ArgSpec::u16("enemyStatusNumber", 4), ArgSpec::u16("compareType", 6)],
    ),
    OpcodeInfo::new(
        "JumpIfPathDistanceFromPlayer",
        &[
            ArgSpec::f32("distance1", 4),
            ArgSpec::f32("distance2", 8),
            ArgSpec::u16("pathNumber", 12),
            ArgSpec::u16("label", 14),
        ],
    ),
    OpcodeInfo::new("WaitBinded", &[]),
    // 0x60
    OpcodeInfo::new("WaitRotateAction", &[]),
    OpcodeInfo::new("WaitJumpAction", &[]),
    OpcodeInfo::new("WaitJumpActionInActive", &[]),
    OpcodeInfo::new("WaitJumpActionExceptLand", &[]),
    OpcodeInfo::new("WaitPathAction", &[]),
    OpcodeInfo::new("WaitMove", &[]),
    OpcodeInfo::new("WaitIfIdleAction", &[]),
    OpcodeInfo::new("BindObject", &[ArgSpec::u16("targetLabel", 4), ArgSpec::u16("sync", 6)]),
    OpcodeInfo::new("ReleaseBindObject", &[]),
    OpcodeInfo::new(
        "TargetToDesappear",
        &[ArgSpec::u16("targetLabel", 4), ArgSpec::u16("status", 6), ArgSpec::u16("silent", 8)],
    ),
    OpcodeInfo::new("SetVariableU16", &[ArgSpec::u16("value", 4), ArgSpec::u16("number", 6)]),
    OpcodeInfo::new("AddVariableU16", &[ArgSpec::u16("value", 4), ArgSpec::u16("number", 6)]),
    OpcodeInfo::new(
        "JumpIfVariableU16",
        &[
            ArgSpec::u16("value", 4),
            ArgSpec::u16("number", 6),
            ArgSpec::u16("compareType", 8),
            ArgSpec::u16("label", 10),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfVariableU16",
        &[ArgSpec::u16("value", 4), ArgSpec::u16("number", 6), ArgSpec::u16("compareType", 8)],
    ),
    OpcodeInfo::new("SetVariableU16SelfLabel", &[ArgSpec::u16("number", 4)]),
    OpcodeInfo::new("SetVariableGlobal", &[ArgSpec::u16("value", 4), ArgSpec::u16("number", 6)]),
    // 0x70
    OpcodeInfo::new("AddVariableGlobal", &[ArgSpec::u16("value", 4), ArgSpec::u16("number", 6)]),
    OpcodeInfo::new(
        "JumpIfVariableGlobal",
        &[
            ArgSpec::u16("value", 4),
            ArgSpec::u16("number", 6),
            ArgSpec::u16("compareType", 8),
            ArgSpec::u16("label", 10),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfVariableGlobal",
        &[ArgSpec::u16("value", 4), ArgSpec::u16("number", 6), ArgSpec::u16("compareType", 8)],
    ),
    OpcodeInfo::new("SetVariableGlobalSelfLabel", &[ArgSpec::u16("number", 4)]),
    OpcodeInfo::new(
        "JumpIfCurrentPortal",
        &[
            ArgSpec::u16("portalNumber", 4),
            ArgSpec::u16("compareType", 6),
            ArgSpec::u16("label", 8),
        ],
    ),
    OpcodeInfo::new(
        "WaitIfCurrentPortal",
        &[ArgSpec::u16("portalNumber", 4), ArgSpec::u16("compareType", 6)],
    ),
    OpcodeInfo::new("JumpIfRescued", &[ArgSpec::u16("peopleNumber", 4), ArgSpec::u16("label", 6)]),
    OpcodeInfo::new("Idle", &[]),
    OpcodeInfo::new(
        "Rotation",
        &[
            ArgSpec::u16("direction", 4),
            ArgSpec::u16("isFreeAngle", 6),
            ArgSpec::f32("speedRate", 8),
        ],
    ),
    OpcodeInfo::new("RotationX", &[ArgSpec::f32("angle", 4), ArgSpec::f32("speed", 8)]),
    OpcodeInfo::new("RotationY", &[ArgSpec::f32("angle", 4), ArgSpec::f32("speed", 8)]),
    OpcodeInfo::new("RotationZ", &[ArgSpec::f32("angle", 4), ArgSpec::f32("speed", 8)]),
    OpcodeInfo::new("GimmickEnableEndOfDemoYaw", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("GimmickEnableDomoCast", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("EnableColoration", &[]),
    OpcodeInfo::new("Alpha", &[ArgSpec::f32("alpha", 4), ArgSpec::f32("speed", 8)]),
    // 0x80
    OpcodeInfo::new("LookAtPlayer", &[ArgSpec::f32("speedRate", 4), ArgSpec::u16("behind", 8)]),
    OpcodeInfo::new(
        "LookAtObject",
        &[ArgSpec::f32("speedRate", 4), ArgSpec::u16("behind", 8), ArgSpec::u16("targetLabel", 10)],
    ),
    OpcodeInfo::new(
        "Prowl",
        &[
            ArgSpec::u16("point0", 4),
            ArgSpec::u16("point1", 6),
            ArgSpec::u16("direction", 8),
            ArgSpec::u16("reserved", 10),
            ArgSpec::f32("speed", 12),
            ArgSpec::u16("complement", 16),
            ArgSpec::u16("followPath", 18),
        ],
    ),
    OpcodeInfo::new(
        "Move",
        &[
            ArgSpec::u16("point0", 4),
            ArgSpec::u16("forword", 6),
            ArgSpec::f32("speed", 8),
            ArgSpec::f32("firstSpeed", 12),
            ArgSpec::f32("minimumSpeed", 16),
            ArgSpec::f32("maxSpeed", 20),
            ArgSpec::f32("fricCoeff", 24),
            ArgSpec::u16("slope", 28),
            ArgSpec::u16("hitWall", 30),
        ],
    ),
    OpcodeInfo::new(
        "Circle",
        &[
            ArgSpec::u16("point1", 4),
            ArgSpec::u16("type", 6),
            ArgSpec::f32("speed", 8),
            ArgSpec::f32("offset", 12),
        ],
    ),
    OpcodeInfo::new(
        "Revolve",
        &[ArgSpec::u16("point1", 4), ArgSpec::u16("reserved", 6), ArgSpec::f32("speed", 8)],
    ),
    OpcodeInfo::new("JumpAction", &[ArgSpec::f32("speedRate", 4), ArgSpec::f32("jumpPower", 8)]),
    OpcodeInfo::new(
        "PathLinear",
        &[ArgSpec::u16("point1", 4), ArgSpec::u16("frames", 6), ArgSpec::u16("followPath", 8)],
    ),
    OpcodeInfo::new(
        "GimmickPathLinear",
        &[
            ArgSpec::u16("point1", 4),
            ArgSpec::u16("frames", 6),
            ArgSpec::u16("followPath", 8),
            ArgSpec::u16("groundCheckPolicy", 10),
        ],
    ),
    OpcodeInfo::new(
        "PathBSpline",
        &[ArgSpec::u16("point1", 4), ArgSpec::u16("point2", 6), ArgSpec::u16("frames", 8)],
    ),
    OpcodeInfo::new(
        "PathBSplineJ",
        &[ArgSpec::u16("point2", 4), ArgSpec::u16("frames", 6), ArgSpec::f32("height", 8)],
    ),
    OpcodeInfo::new(
        "PathBSplineJPoint",
        &[ArgSpec::u16("point1", 4), ArgSpec::u16("point2", 6), ArgSpec::u16("frames", 8)],
    ),
    OpcodeInfo::new(
        "StartBullet",
        &[
            ArgSpec::u16("point0", 4),
            ArgSpec::u16("point1", 6),
            ArgSpec::u16("frame", 8),
            ArgSpec::u16("num", 10),
            ArgSpec::f32("height", 12),
            ArgSpec::u16("pathBindPolicy", 16),
        ],
    ),
    OpcodeInfo::new(
        "StartBulletParabola",
        &[
            ArgSpec::u16("point0", 4),
            ArgSpec::u16("point1", 6),
            ArgSpec::u16("frame", 8),
            ArgSpec::u16("num", 10),
            ArgSpec::f32("speed", 12),
            ArgSpec::f32("upSpeed", 16),
            ArgSpec::f32("dmy", 20),
            ArgSpec::u16("pathBindPolicy", 24),
        ],
    ),
    OpcodeInfo::new(
        "E00SetLookAround",
        &[
            ArgSpec::u16("enalbe", 4),
            ArgSpec::u16("eyes", 6),
            ArgSpec::f32("interval", 8),
            ArgSpec::u16("turn", 12),
        ],
    ),
    OpcodeInfo::new(
        "E00ManualPlayMotion",
        &[ArgSpec::f32("interpolate", 4), ArgSpec::u16("index", 8)],
    ),
    // 0x90
    OpcodeInfo::new(
        "E00HipSlide",
        &[
            ArgSpec::u16("point0", 4),
            ArgSpec::u16("forword", 6),
            ArgSpec::f32("speed", 8),
            ArgSpec::f32("firstSpeed", 12),
            ArgSpec::f32("minimumSpeed", 16),
            ArgSpec::f32("maxSpeed", 20),
            ArgSpec::f32("fricCoeff", 24),
            ArgSpec::u16("slope", 28),
            ArgSpec::u16("hitWall", 30),
        ],
    ),
    OpcodeInfo::new("E00WaitHipSlide", &[]),
    OpcodeInfo::new(
        "E00HomingPlayer",
        &[
            ArgSpec::f32("serchInterval", 4),
            ArgSpec::f32("serchRange", 8),
            ArgSpec::f32("turnInterval", 12),
            ArgSpec::u16("enable", 16),
        ],
    ),
    OpcodeInfo::new("E00JokerStage", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("E00BindLeef", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("E00ToRideLeefAction", &[]),
    OpcodeInfo::new("E00ToEndRideLeefAction", &[]),
    OpcodeInfo::new("E00WaitEndRideLeefAction", &[]),
    OpcodeInfo::new(
        "E00ToRidePoleAction",
        &[ArgSpec::f32("x", 4), ArgSpec::f32("y", 8), ArgSpec::f32("z", 12)],
    ),
    OpcodeInfo::new("E00WaitEndRidePoleAction", &[]),
    OpcodeInfo::new("E00AddWallCollision", &[]),
    OpcodeInfo::new(
        "E02EnableNockbackToFall",
        &[
            ArgSpec::u16("value", 4),
            ArgSpec::u16("point0", 6),
            ArgSpec::u16("point1", 8),
            ArgSpec::u16("fallLimitHeight", 10),
        ],
    ),
    OpcodeInfo::new(
        "E02FollowPlayer",
        &[
            ArgSpec::u16("point0", 4),
            ArgSpec::u16("point1", 6),
            ArgSpec::f32("speed", 8),
            ArgSpec::f32("jumpHeight", 12),
            ArgSpec::f32("jumpInterval", 16),
            ArgSpec::u16("forward", 20),
        ],
    ),
    OpcodeInfo::new(
        "E04EnableNockbackToFall",
        &[
            ArgSpec::u16("value", 4),
            ArgSpec::u16("point0", 6),
            ArgSpec::u16("point1", 8),
            ArgSpec::u16("fallLimitHeight", 10),
        ],
    ),
    OpcodeInfo::new("E05WaitIfArmorBreak", &[]),
    OpcodeInfo::new("E05JumpIfArmorBreak", &[ArgSpec::u16("label", 4)]),
    // 0xA0
    OpcodeInfo::new("E07WaitIfArmorBreak", &[]),
    OpcodeInfo::new("E07JumpIfArmorBreak", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("E09ToSpecifiedbe11", &[]),
    OpcodeInfo::new(
        "E09ToSpecifiedbe11Param",
        &[
            ArgSpec::f32("jumpDistance", 4),
            ArgSpec::f32("jumpHeight", 8),
            ArgSpec::f32("frames", 12),
            ArgSpec::u16("forward", 16),
        ],
    ),
    OpcodeInfo::new("E09ToSpecifiedbe12", &[]),
    OpcodeInfo::new(
        "E09ToSpecifiedbe12Param",
        &[ArgSpec::f32("addSpeed", 4), ArgSpec::f32("maxSpeed", 8)],
    ),
    OpcodeInfo::new("E09ReinforcedJumpDescent", &[ArgSpec::f32("reinforcedHeight", 4)]),
    OpcodeInfo::new("E09ToSpecifiedbe13", &[]),
    OpcodeInfo::new(
        "E10ToSpecifiedbe13Param",
        &[
            ArgSpec::f32("speed", 4),
            ArgSpec::f32("jumpDistance", 8),
            ArgSpec::f32("jumpHeight", 12),
            ArgSpec::f32("frames", 16),
            ArgSpec::u16("forward", 20),
        ],
    ),
    OpcodeInfo::new("E11SetLandPointNum", &[ArgSpec::u16("num", 4)]),
    OpcodeInfo::new("E11HiJumpHeight", &[ArgSpec::u16("height", 4)]),
    OpcodeInfo::new("E11HiJumpRange", &[ArgSpec::u16("range", 4)]),
    OpcodeInfo::new("E12OnlyIdleMotion", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new(
        "E12AutoFloatFly",
        &[ArgSpec::f32("maxHeight", 4), ArgSpec::f32("frame", 8), ArgSpec::u16("enable", 12)],
    ),
    OpcodeInfo::new("E12SERange", &[ArgSpec::f32("range", 4)]),
    OpcodeInfo::new("E12IdleMotionIsRest", &[ArgSpec::u16("enable", 4)]),
    // 0xB0
    OpcodeInfo::new("E17ShakeCamera", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("E17RotSpeed", &[ArgSpec::f32("speed", 4)]),
    OpcodeInfo::new("E17WaitFallLimt", &[ArgSpec::f32("height", 4)]),
    OpcodeInfo::new("E17EnableJumpBound", &[ArgSpec::f32("enable", 4)]),
    OpcodeInfo::new(
        "E17SpecialB01",
        &[
            ArgSpec::u16("turnPoint", 4),
            ArgSpec::u16("aimPoint", 6),
            ArgSpec::f32("turnRange", 8),
            ArgSpec::f32("curveRate", 12),
        ],
    ),
    OpcodeInfo::new("E17NonBoundLand", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("E19Appear", &[ArgSpec::u16("groundUnder", 4)]),
    OpcodeInfo::new("E19WaitReadyAttack", &[]),
    OpcodeInfo::new("E20AttackInterval", &[ArgSpec::f32("frame", 4)]),
    OpcodeInfo::new("E20TurnParam", &[ArgSpec::f32("turn", 4), ArgSpec::f32("brake", 8)]),
    OpcodeInfo::new("E20AttackRate", &[ArgSpec::f32("rate", 4)]),
    OpcodeInfo::new(
        "E21SomersaultSpeed",
        &[ArgSpec::f32("inSpeed", 4), ArgSpec::f32("outSpeed", 8)],
    ),
    OpcodeInfo::new("E25TurnIdleFrame", &[ArgSpec::f32("frame", 4)]),
    OpcodeInfo::new("E27ExplosionLimit", &[ArgSpec::f32("time", 4)]),
    OpcodeInfo::new("E27InActivate", &[ArgSpec::u16("silent", 4)]),
    OpcodeInfo::new("E27EnableActiveFall", &[]),
    // 0xC0
    OpcodeInfo::new(
        "E28Fluctuate",
        &[
            ArgSpec::f32("hDistance", 4),
            ArgSpec::f32("vDistance", 8),
            ArgSpec::u16("hCycle", 12),
            ArgSpec::u16("vCycle", 14),
            ArgSpec::f32("speed", 16),
        ],
    ),
    OpcodeInfo::new(
        "E29ActionParam",
        &[
            ArgSpec::f32("interval", 4),
            ArgSpec::f32("range", 8),
            ArgSpec::u16("prowlTurn", 12),
            ArgSpec::u16("lookForce", 14),
            ArgSpec::f32("turnDistance", 16),
        ],
    ),
    OpcodeInfo::new("E30AppearTime", &[ArgSpec::f32("time", 4)]),
    OpcodeInfo::new("E30MoveSpeed", &[ArgSpec::f32("moveSpeed", 4)]),
    OpcodeInfo::new("E30WaitVanish", &[]),
    OpcodeInfo::new(
        "E31AttackParam",
        &[
            ArgSpec::f32("interval", 4),
            ArgSpec::f32("miniRange", 8),
            ArgSpec::f32("maxRange", 12),
            ArgSpec::f32("miniSpeed", 16),
            ArgSpec::f32("maxSpeed", 20),
            ArgSpec::f32("maxRangeTime", 24),
        ],
    ),
    OpcodeInfo::new("E33AttackSwingAngle", &[ArgSpec::f32("max", 4), ArgSpec::f32("minimum", 8)]),
    OpcodeInfo::new("E33NonAttackProwlRate", &[ArgSpec::f32("rate", 4)]),
    OpcodeInfo::new("E33ChainMaxRange", &[ArgSpec::f32("length", 4)]),
    OpcodeInfo::new("E35EnableAttackInIdle", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("E35AttackPostureRange", &[ArgSpec::f32("xZ", 4), ArgSpec::f32("y", 8)]),
    OpcodeInfo::new("E35AttackSpeedRate", &[ArgSpec::f32("rate", 4)]),
    OpcodeInfo::new("E33EnableForceStopAttack", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("E33WaitEndAttack", &[]),
    OpcodeInfo::new("E35SetBalloonLifeTime", &[ArgSpec::f32("frame", 4)]),
    OpcodeInfo::new("E37SetLandPointNum", &[ArgSpec::u16("num", 4)]),
    // 0xD0
    OpcodeInfo::new("E37EnableManualLandPoint", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new(
        "E37SetLandPoint",
        &[ArgSpec::f32("x", 4), ArgSpec::f32("y", 8), ArgSpec::f32("z", 12)],
    ),
    OpcodeInfo::new("E37ProwlEndEdge", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("E37Fall", &[ArgSpec::f32("stepWidth", 4)]),
    OpcodeInfo::new("E37FallParam", &[ArgSpec::f32("firstG", 4), ArgSpec::f32("xZRate", 8)]),
    OpcodeInfo::new("E37FollowPlayer", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("E39ChangeAttackMode", &[ArgSpec::u16("mode", 4)]),
    OpcodeInfo::new(
        "E39AttackRangeAngle",
        &[ArgSpec::u16("angle", 4), ArgSpec::u16("randomAttack", 6), ArgSpec::u16("range", 8)],
    ),
    OpcodeInfo::new(
        "E39ChangeAttackModeByPath",
        &[ArgSpec::u16("mode", 4), ArgSpec::u16("path", 6)],
    ),
    OpcodeInfo::new(
        "E39AutoJump",
        &[
            ArgSpec::u16("point0", 4),
            ArgSpec::u16("point1", 6),
            ArgSpec::f32("frames", 8),
            ArgSpec::f32("height", 12),
            ArgSpec::f32("interval", 16),
        ],
    ),
    OpcodeInfo::new(
        "E39NearBulletParam",
        &[ArgSpec::f32("lifeTime", 4), ArgSpec::f32("speed", 8), ArgSpec::f32("upSpeed", 12)],
    ),
    OpcodeInfo::new("E40SetGuardInterval", &[ArgSpec::f32("frame", 4)]),
    OpcodeInfo::new("E40SetJumpHeight", &[ArgSpec::f32("height", 4)]),
    OpcodeInfo::new("E40WaitCarelessAction", &[]),
    OpcodeInfo::new("E40DontMoveProwl", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("E41DefaultAngle", &[ArgSpec::f32("angle", 4)]),
    // 0xE0
    OpcodeInfo::new(
        "E41SetParam",
        &[
            ArgSpec::f32("maxSlope", 4),
            ArgSpec::f32("frame", 8),
            ArgSpec::f32("ivyScale", 12),
            ArgSpec::f32("turnRate", 16),
        ],
    ),
    OpcodeInfo::new(
        "E42AttackParam",
        &[
            ArgSpec::f32("frame", 4),
            ArgSpec::f32("speed", 8),
            ArgSpec::f32("range", 12),
            ArgSpec::u16("direction", 16),
            ArgSpec::u16("followPath", 18),
        ],
    ),
    OpcodeInfo::new("StartBossCamera", &[]),
    OpcodeInfo::new("B00EnableApplyTranslateFromNode", &[]),
    OpcodeInfo::new("B04ResetHeart", &[]),
    OpcodeInfo::new("B06Replace", &[]),
    OpcodeInfo::new("G00WaitSwitchStatus", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("G00Reset", &[ArgSpec::u16("roll", 4)]),
    OpcodeInfo::new("G00AlreadyON", &[]),
    OpcodeInfo::new("G00AlreadyONUnlock", &[]),
    OpcodeInfo::new("G00HitToChangeStatusAlways", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("G00UseMissSE", &[]),
    OpcodeInfo::new("G04WaitFall", &[]),
    OpcodeInfo::new("G04AlreadyFall", &[]),
    OpcodeInfo::new("G03BreakFrame", &[ArgSpec::f32("frame", 4), ArgSpec::u16("index", 8)]),
    OpcodeInfo::new("G03StartMove", &[]),
    // 0xF0
    OpcodeInfo::new("G03WaitStop", &[]),
    OpcodeInfo::new("G03FlyCartFrame", &[ArgSpec::f32("frame", 4)]),
    OpcodeInfo::new("G03PlayerSeparateFrame", &[ArgSpec::f32("frame", 4)]),
    OpcodeInfo::new("G03DestroyedExplosion", &[ArgSpec::f32("frame", 4)]),
    OpcodeInfo::new(
        "G03SmallExplosion",
        &[ArgSpec::f32("x", 4), ArgSpec::f32("y", 8), ArgSpec::f32("z", 12)],
    ),
    OpcodeInfo::new("G03WaitCameraFrame", &[ArgSpec::f32("frame", 4)]),
    OpcodeInfo::new("G05SetAmplitude", &[ArgSpec::f32("amplitude", 4)]),
    OpcodeInfo::new("G05SetFactor", &[ArgSpec::f32("factor", 4)]),
    OpcodeInfo::new(
        "G06SetFlyMoveParam",
        &[
            ArgSpec::f32("frame", 4),
            ArgSpec::f32("height", 8),
            ArgSpec::f32("width", 12),
            ArgSpec::f32("slope", 16),
            ArgSpec::u16("num", 20),
        ],
    ),
    OpcodeInfo::new(
        "G08Start",
        &[
            ArgSpec::f32("height", 4),
            ArgSpec::f32("timeStay", 8),
            ArgSpec::f32("timeShake", 12),
            ArgSpec::f32("timeStore", 16),
            ArgSpec::f32("timeRise", 20),
            ArgSpec::f32("timeBoilOut", 24),
            ArgSpec::f32("timeFall", 28),
        ],
    ),
    OpcodeInfo::new("G11Param", &[ArgSpec::f32("scale", 4), ArgSpec::u16("rideable", 8)]),
    OpcodeInfo::new("G11GlowUp", &[ArgSpec::f32("speed", 4)]),
    OpcodeInfo::new("G11FromDemo", &[]),
    OpcodeInfo::new("G12RopeHangPoint", &[ArgSpec::u16("point", 4)]),
    OpcodeInfo::new("G12WaitRidePlayer", &[]),
    OpcodeInfo::new("G12SetSlope", &[ArgSpec::f32("minSlope", 4), ArgSpec::f32("maxSlope", 8)]),
    // 0x100
    OpcodeInfo::new("G12EnableGetOff", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("G12HoldHangPoint", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("G12CSetOwner", &[ArgSpec::u16("targetLabel", 4)]),
    OpcodeInfo::new(
        "G12CRollParam",
        &[ArgSpec::f32("rotSpeed", 4), ArgSpec::u16("checkMoveXZ", 8)],
    ),
    OpcodeInfo::new("G13WaitRidePlayer", &[]),
    OpcodeInfo::new("G13WaitMove", &[]),
    OpcodeInfo::new("G13HardBindPlayer", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new(
        "G15SetPower",
        &[ArgSpec::f32("manualJumpPower", 4), ArgSpec::f32("autoJumpPower", 8)],
    ),
    OpcodeInfo::new("G16ToFall", &[]),
    OpcodeInfo::new("G17AlreadyBloom", &[]),
    OpcodeInfo::new("G17WaitBloom", &[]),
    OpcodeInfo::new("G18AlreadyStop", &[]),
    OpcodeInfo::new("G18WaitRidePlayer", &[]),
    OpcodeInfo::new("G18MoveStart", &[]),
    OpcodeInfo::new("G18WaitFinish", &[]),
    OpcodeInfo::new("G18WaitFrame", &[ArgSpec::f32("frame", 4)]),
    // 0x110
    OpcodeInfo::new("G21SetStopFrame", &[ArgSpec::f32("frame", 4), ArgSpec::u16("index", 8)]),
    OpcodeInfo::new(
        "G21SetAdjustCameraOffset",
        &[
            ArgSpec::f32("x", 4),
            ArgSpec::f32("y", 8),
            ArgSpec::f32("z", 12),
            ArgSpec::u16("index", 16),
        ],
    ),
    OpcodeInfo::new("G21SetStartPoint", &[ArgSpec::u16("index", 4)]),
    OpcodeInfo::new("G21Activate", &[ArgSpec::u16("active", 4)]),
    OpcodeInfo::new(
        "G21FirstPower",
        &[
            ArgSpec::f32("firstSpeedRate", 4),
            ArgSpec::f32("downSpeedRate", 8),
            ArgSpec::u16("index", 12),
        ],
    ),
    OpcodeInfo::new("G21TurnOnThePower", &[]),
    OpcodeInfo::new("G21WaitFinishTurnOnThePower", &[]),
    OpcodeInfo::new("G21SetFinishTurnOnThePower", &[]),
    OpcodeInfo::new("G24StartOpen", &[]),
    OpcodeInfo::new("G24BToOpen", &[ArgSpec::u16("already", 4)]),
    OpcodeInfo::new("G27DoExec", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("G28BindPlayer", &[ArgSpec::u16("bind", 4)]),
    OpcodeInfo::new("G29InactivateWings", &[]),
    OpcodeInfo::new("G30LeefAngle", &[ArgSpec::f32("angleZ", 4), ArgSpec::f32("angleY", 8)]),
    OpcodeInfo::new("G31SetFallTime", &[ArgSpec::f32("timeLimit", 4)]),
    OpcodeInfo::new(
        "G32SetHangPoint",
        &[ArgSpec::u16("point0", 4), ArgSpec::u16("point1", 6), ArgSpec::f32("postRate", 8)],
    ),
    // 0x120
    OpcodeInfo::new(
        "G32SetParam",
        &[ArgSpec::f32("rideFrame", 4), ArgSpec::f32("width", 8), ArgSpec::f32("height", 12)],
    ),
    OpcodeInfo::new(
        "G33SetParam",
        &[
            ArgSpec::f32("hangHeight", 4),
            ArgSpec::f32("maxSlope", 8),
            ArgSpec::f32("slopeFrame", 12),
        ],
    ),
    OpcodeInfo::new("G33BackRopeColorRate", &[ArgSpec::f32("rate", 4)]),
    OpcodeInfo::new("G34ToBreak", &[]),
    OpcodeInfo::new("G34MakeKey", &[]),
    OpcodeInfo::new("G34JumpIfValidKey", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new(
        "G34PathBSpline",
        &[ArgSpec::u16("point1", 4), ArgSpec::u16("point2", 6), ArgSpec::u16("frames", 8)],
    ),
    OpcodeInfo::new("G36RideTime", &[ArgSpec::f32("time", 4)]),
    OpcodeInfo::new("G43WaitRidePlayer", &[]),
    OpcodeInfo::new(
        "G43PathLinear",
        &[
            ArgSpec::u16("point1", 4),
            ArgSpec::u16("frames", 6),
            ArgSpec::u16("followPath", 8),
            ArgSpec::u16("groundCheckPolicy", 10),
        ],
    ),
    OpcodeInfo::new("G44WaitRidePlayer", &[]),
    OpcodeInfo::new(
        "G44PathLinear",
        &[
            ArgSpec::u16("point1", 4),
            ArgSpec::u16("frames", 6),
            ArgSpec::u16("followPath", 8),
            ArgSpec::u16("groundCheckPolicy", 10),
        ],
    ),
    OpcodeInfo::new("G45StartRemove", &[]),
    OpcodeInfo::new("G46OpenBarricase", &[ArgSpec::u16("index", 4)]),
    OpcodeInfo::new("G46LimitPos", &[ArgSpec::f32("limit", 4), ArgSpec::u16("index", 8)]),
    OpcodeInfo::new("G46AlreadyOpen", &[ArgSpec::u16("index", 4)]),
    // 0x130
    OpcodeInfo::new("G49WaitRidePlayer", &[]),
    OpcodeInfo::new("G49NoDummyPathMode", &[]),
    OpcodeInfo::new("G49Setv524Mode", &[]),
    OpcodeInfo::new(
        "G49v524PathLinear",
        &[
            ArgSpec::f32("frames", 4),
            ArgSpec::u16("followPath", 8),
            ArgSpec::u16("groundCheckPolicy", 10),
        ],
    ),
    OpcodeInfo::new("G50SetLimitDistance", &[ArgSpec::f32("distance", 4)]),
    OpcodeInfo::new("G50SetTime", &[ArgSpec::u16("time", 4)]),
    OpcodeInfo::new("G50StartOn", &[]),
    OpcodeInfo::new("G50StartOff", &[]),
    OpcodeInfo::new("G50StatusOn", &[]),
    OpcodeInfo::new("G51Open", &[]),
    OpcodeInfo::new("G53SetColor", &[ArgSpec::u16("color", 4)]),
    OpcodeInfo::new("G53WaitBroken", &[]),
    OpcodeInfo::new("G54SetColor", &[ArgSpec::u16("color", 4)]),
    OpcodeInfo::new("G54StartOpen", &[]),
    OpcodeInfo::new("G54Opened", &[]),
    OpcodeInfo::new("G55SetColor", &[ArgSpec::u16("color", 4)]),
    // 0x140
    OpcodeInfo::new("G55StartOpen", &[]),
    OpcodeInfo::new("G55Opened", &[]),
    OpcodeInfo::new("G56WaitRidePlayer", &[]),
    OpcodeInfo::new(
        "G56PathLinear",
        &[
            ArgSpec::u16("point1", 4),
            ArgSpec::u16("frames", 6),
            ArgSpec::u16("followPath", 8),
            ArgSpec::u16("groundCheckPolicy", 10),
        ],
    ),
    OpcodeInfo::new("G56SetActionMode", &[ArgSpec::u16("mode", 4)]),
    OpcodeInfo::new("G56ReleaseDummyPath", &[ArgSpec::u16("pathNumber", 4)]),
    OpcodeInfo::new("G56SetV621CameraMode", &[]),
    OpcodeInfo::new(
        "G57SetParameter",
        &[
            ArgSpec::f32("vanishTimeLimit", 4),
            ArgSpec::f32("vanishingTimeLimit", 8),
            ArgSpec::f32("cycleRotateXTime", 12),
            ArgSpec::f32("cycleRotateYTime", 16),
            ArgSpec::f32("waveringRotateLimit", 20),
        ],
    ),
    OpcodeInfo::new(
        "G58SetParameter",
        &[
            ArgSpec::f32("vanishTimeLimit", 4),
            ArgSpec::f32("vanishingTimeLimit", 8),
            ArgSpec::f32("cycleRotateXTime", 12),
            ArgSpec::f32("waveringRotateLimit", 16),
        ],
    ),
    OpcodeInfo::new("G59BindPlayer", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new("G59WaitRidePlayer", &[]),
    OpcodeInfo::new("G64Param", &[ArgSpec::f32("width", 4), ArgSpec::f32("frame", 8)]),
    OpcodeInfo::new("G64Open", &[]),
    OpcodeInfo::new("G64AlreadyOpen", &[]),
    OpcodeInfo::new("G68SetTime", &[ArgSpec::f32("time", 4)]),
    OpcodeInfo::new("G68StartMove", &[]),
    // 0x150
    OpcodeInfo::new("G68Moved", &[]),
    OpcodeInfo::new("G78Visible", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new("G78WaitDestroy", &[]),
    OpcodeInfo::new(
        "G78WaitDestroyAndAddItem",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::u16("isTranslucent", 8),
            ArgSpec::u16("toCatch", 10),
        ],
    ),
    OpcodeInfo::new(
        "G78WaitDestroyAndAddResidentItem",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::u16("isTranslucent", 8),
            ArgSpec::u16("toCatch", 10),
            ArgSpec::f32("zoomRate", 12),
            ArgSpec::f32("scaleRate", 16),
        ],
    ),
    OpcodeInfo::new(
        "G78WaitDestroyAndAddDropItem",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::f32("frontSpeed", 8),
            ArgSpec::f32("powerY", 12),
            ArgSpec::f32("speedY", 16),
            ArgSpec::u16("isTranslucent", 20),
            ArgSpec::u16("useShadow", 22),
        ],
    ),
    OpcodeInfo::new(
        "G78WaitDestroyAndAddItemToJump",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::u16("isTranslucent", 8),
            ArgSpec::u16("frames", 10),
            ArgSpec::f32("toX", 12),
            ArgSpec::f32("toY", 16),
            ArgSpec::f32("toZ", 20),
            ArgSpec::f32("height", 24),
            ArgSpec::f32("boundSpeed", 28),
        ],
    ),
    OpcodeInfo::new("G78MakeKey", &[]),
    OpcodeInfo::new("G78JumpIfValidKey", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("G87PowerUp", &[ArgSpec::f32("frames", 4)]),
    OpcodeInfo::new("G87PowerDown", &[ArgSpec::f32("frames", 4)]),
    OpcodeInfo::new(
        "G87SetParam",
        &[
            ArgSpec::f32("power", 4),
            ArgSpec::f32("downPower", 8),
            ArgSpec::f32("limitPower", 12),
            ArgSpec::f32("maximumHeight", 16),
            ArgSpec::f32("influenceHeight", 20),
            ArgSpec::f32("influenceRadius", 24),
            ArgSpec::u16("boost", 28),
        ],
    ),
    OpcodeInfo::new("G87PriorityHigh", &[]),
    OpcodeInfo::new(
        "G89SetParam",
        &[
            ArgSpec::f32("power", 4),
            ArgSpec::f32("downPower", 8),
            ArgSpec::f32("limitPower", 12),
            ArgSpec::f32("maximumHeight", 16),
            ArgSpec::f32("influenceHeight", 20),
            ArgSpec::f32("influenceRadius", 24),
            ArgSpec::u16("boost", 28),
        ],
    ),
    OpcodeInfo::new("G89Distance", &[ArgSpec::f32("distance", 4)]),
    OpcodeInfo::new("G89EffectOffsetY", &[ArgSpec::f32("offsetY", 4)]),
    // 0x160
    OpcodeInfo::new("Gb1SetBurnoutTime", &[ArgSpec::f32("time", 4)]),
    OpcodeInfo::new("Gb1SetLowBurningTime", &[ArgSpec::f32("time", 4)]),
    OpcodeInfo::new("Gb1SetHighBurningTime", &[ArgSpec::f32("time", 4)]),
    OpcodeInfo::new(
        "Gb1SetBlazeHeightLevel",
        &[ArgSpec::f32("lowHeight", 4), ArgSpec::f32("highHeight", 8), ArgSpec::u16("level", 12)],
    ),
    OpcodeInfo::new("GbaSetCloseSpeed", &[ArgSpec::f32("speed", 4)]),
    OpcodeInfo::new("GbaStartClose", &[]),
    OpcodeInfo::new("GbcRideableParam", &[ArgSpec::f32("height", 4), ArgSpec::f32("width", 8)]),
    OpcodeInfo::new("GbcDisableRaideablePlayerPath", &[ArgSpec::u16("pathNumber", 4)]),
    OpcodeInfo::new(
        "AddItemI12",
        &[
            ArgSpec::f32("x", 4),
            ArgSpec::f32("y", 8),
            ArgSpec::f32("z", 12),
            ArgSpec::u16("pathNumber", 16),
            ArgSpec::u16("isTranslucent", 18),
            ArgSpec::f32("recX", 20),
            ArgSpec::f32("recY", 24),
            ArgSpec::f32("recZ", 28),
            ArgSpec::u16("recDirection", 32),
            ArgSpec::u16("sleepDistance", 34),
            ArgSpec::u16("checkPathMin", 36),
        ],
    ),
    OpcodeInfo::new(
        "I13AddSimpleItemWithSetSpeed",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::u16("pathNumber", 20),
            ArgSpec::u16("isTranslucent", 22),
            ArgSpec::f32("speed", 24),
            ArgSpec::f32("range", 28),
        ],
    ),
    OpcodeInfo::new(
        "AddItemGoldenMedal",
        &[
            ArgSpec::u16("userID", 4),
            ArgSpec::u16("characterID", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::u16("pathNumber", 20),
        ],
    ),
    OpcodeInfo::new("J03Open", &[]),
    OpcodeInfo::new("J03Close", &[]),
    OpcodeInfo::new("J03AlreadyOpend", &[]),
    OpcodeInfo::new("J04OpenDown", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new(
        "AddWormHole",
        &[
            ArgSpec::f32("suckingForce", 4),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
        ],
    ),
    // 0x170
    OpcodeInfo::new("P00ReleaseAttachingModel", &[]),
    OpcodeInfo::new("ShakePlayerCamera", &[ArgSpec::f32("power", 4), ArgSpec::f32("duration", 8)]),
    OpcodeInfo::new("SetPortalMoveLength", &[ArgSpec::u16("length", 4), ArgSpec::u16("time", 6)]),
    OpcodeInfo::new("SetPortalEnterTypeTouch", &[]),
    OpcodeInfo::new("ApplyFX", &[ArgSpec::u16("channel", 4)]),
    OpcodeInfo::new("UnapplyFX", &[]),
    OpcodeInfo::new(
        "StartStream",
        &[
            ArgSpec::u16("number", 4),
            ArgSpec::u16("channel", 6),
            ArgSpec::u16("track", 8),
            ArgSpec::u16("trackFadeTime", 10),
        ],
    ),
    OpcodeInfo::new("SetStreamVolume", &[ArgSpec::f32("volume", 4), ArgSpec::u16("channel", 8)]),
    OpcodeInfo::new("StopStream", &[ArgSpec::u16("channel", 4)]),
    OpcodeInfo::new("FadeInStream", &[ArgSpec::u16("time", 4), ArgSpec::u16("channel", 6)]),
    OpcodeInfo::new("FadeOutStream", &[ArgSpec::u16("time", 4), ArgSpec::u16("channel", 6)]),
    OpcodeInfo::new("PauseStream", &[ArgSpec::u16("time", 4), ArgSpec::u16("channel", 6)]),
    OpcodeInfo::new("UnPauseStream", &[ArgSpec::u16("time", 4), ArgSpec::u16("channel", 6)]),
    OpcodeInfo::new("SoundEffect", &[ArgSpec::u16("effectNumber", 4)]),
    OpcodeInfo::new(
        "SoundEffect3D",
        &[
            ArgSpec::u16("effectNumber", 4),
            ArgSpec::u16("range", 6),
            ArgSpec::f32("pX", 8),
            ArgSpec::f32("pY", 12),
            ArgSpec::f32("pZ", 16),
        ],
    ),
    OpcodeInfo::new("BlackFadeIn", &[ArgSpec::u16("time", 4)]),
    // 0x180
    OpcodeInfo::new("WhiteFadeIn", &[ArgSpec::u16("time", 4)]),
    OpcodeInfo::new("BlackFadeOut", &[ArgSpec::u16("time", 4)]),
    OpcodeInfo::new("WhiteFadeOut", &[ArgSpec::u16("time", 4)]),
    OpcodeInfo::new("WaitFade", &[]),
    OpcodeInfo::new(
        "ColorTile",
        &[
            ArgSpec::u16("time", 4),
            ArgSpec::u16("r", 6),
            ArgSpec::u16("g", 8),
            ArgSpec::u16("b", 10),
            ArgSpec::u16("a", 12),
        ],
    ),
    OpcodeInfo::new(
        "BlurTile",
        &[
            ArgSpec::u16("time", 4),
            ArgSpec::u16("r", 6),
            ArgSpec::u16("g", 8),
            ArgSpec::u16("b", 10),
            ArgSpec::u16("a", 12),
        ],
    ),
    OpcodeInfo::new(
        "ZoomTile",
        &[
            ArgSpec::u16("time", 4),
            ArgSpec::u16("r", 6),
            ArgSpec::u16("g", 8),
            ArgSpec::u16("b", 10),
            ArgSpec::u16("a", 12),
        ],
    ),
    OpcodeInfo::new("EnableColorCapture", &[]),
    OpcodeInfo::new("DisableColorCapture", &[]),
    OpcodeInfo::new("EnableLOD", &[]),
    OpcodeInfo::new("DisableLOD", &[]),
    OpcodeInfo::new(
        "EnableSimpleDOF",
        &[
            ArgSpec::f32("startZ", 4),
            ArgSpec::u16("startV", 8),
            ArgSpec::u16("endV", 10),
            ArgSpec::u16("time", 12),
        ],
    ),
    OpcodeInfo::new("DisableSimpleDOF", &[]),
    OpcodeInfo::new(
        "EnableDOF",
        &[
            ArgSpec::f32("startZ", 4),
            ArgSpec::f32("endZ", 8),
            ArgSpec::u16("startV", 12),
            ArgSpec::u16("endV", 14),
            ArgSpec::u16("type", 16),
            ArgSpec::u16("time", 18),
        ],
    ),
    OpcodeInfo::new("DisableDOF", &[]),
    OpcodeInfo::new(
        "EnableBloom",
        &[ArgSpec::u16("bias", 4), ArgSpec::u16("blend", 6), ArgSpec::u16("time", 8)],
    ),
    // 0x190
    OpcodeInfo::new("DisableBloom", &[]),
    OpcodeInfo::new(
        "EnableClampBloom",
        &[ArgSpec::u16("bias", 4), ArgSpec::u16("blend", 6), ArgSpec::u16("time", 8)],
    ),
    OpcodeInfo::new("DisableClampBloom", &[]),
    OpcodeInfo::new("PreLoadField", &[ArgSpec::u16("fieldNumber", 4)]),
    OpcodeInfo::new("PreLoadDemo", &[ArgSpec::u16("demoNumber", 4)]),
    OpcodeInfo::new(
        "AreaJump",
        &[
            ArgSpec::u16("dstField", 4),
            ArgSpec::u16("dstPortal", 6),
            ArgSpec::u16("portalMoveEffect", 8),
        ],
    ),
    OpcodeInfo::new(
        "PortalModelPosture",
        &[
            ArgSpec::f32("x", 4),
            ArgSpec::f32("y", 8),
            ArgSpec::f32("z", 12),
            ArgSpec::f32("rotateY", 16),
        ],
    ),
    OpcodeInfo::new("PortalDoNotJump", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new(
        "StartDemo",
        &[
            ArgSpec::u16("eventID", 4),
            ArgSpec::u16("waitPlayerStand", 6),
            ArgSpec::u16("surely", 8),
        ],
    ),
    OpcodeInfo::new("WaitDemo", &[]),
    OpcodeInfo::new("JumpIfDemoCleared", &[ArgSpec::u16("eventID", 4), ArgSpec::u16("label", 6)]),
    OpcodeInfo::new("StartStageTitle", &[]),
    OpcodeInfo::new("WaitStageTitle", &[]),
    OpcodeInfo::new("StartStageClear", &[]),
    OpcodeInfo::new("WaitStageClear", &[]),
    OpcodeInfo::new("EndOfStage", &[]),
    // 0x1A0
    OpcodeInfo::new(
        "JumpIfCountOfDramePieces",
        &[ArgSpec::u16("num", 4), ArgSpec::u16("compareType", 6), ArgSpec::u16("label", 8)],
    ),
    OpcodeInfo::new("JumpIfInTimeAttack", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("JumpIfFieldFlipping", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("JumpIfNotFieldFlipping", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("JumpIfNewComer", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("WaitIfKeyOn", &[ArgSpec::u16("keyType", 4)]),
    OpcodeInfo::new("JumpIfKeyOn", &[ArgSpec::u16("keyType", 4), ArgSpec::u16("label", 6)]),
    OpcodeInfo::new("WaitIfForbidOperation", &[]),
    OpcodeInfo::new("JumpIfForbidOperation", &[ArgSpec::u16("label", 4)]),
    OpcodeInfo::new("ReservePlayerIdleAction", &[ArgSpec::u16("idleActionNumber", 4)]),
    OpcodeInfo::new("SetEclipseMode", &[ArgSpec::u16("enable", 4)]),
    OpcodeInfo::new(
        "WaitIfEclipseMode",
        &[ArgSpec::u16("value", 4), ArgSpec::u16("compareType", 6)],
    ),
    OpcodeInfo::new(
        "JumpIfEclipseMode",
        &[ArgSpec::u16("value", 4), ArgSpec::u16("compareType", 6), ArgSpec::u16("label", 8)],
    ),
    OpcodeInfo::new("DeclareBossStage", &[ArgSpec::u16("enabled", 4)]),
    OpcodeInfo::new("StartManualDemo", &[ArgSpec::u16("sleepPlayer", 4)]),
    OpcodeInfo::new("EndManualDemo", &[ArgSpec::u16("unsleepPlayer", 4)]),
    // 0x1B0
    OpcodeInfo::new("DeclareTimeAttackForExtra2", &[]),
    OpcodeInfo::new("StartTimeAttackRecord", &[]),
    OpcodeInfo::new("StopTimeAttackRecord", &[]),
    OpcodeInfo::new(
        "VisibleLandscapeNode",
        &[ArgSpec::string("nodeName", 4), ArgSpec::u16("recursive", 8)],
    ),
    OpcodeInfo::new("VisibleLandscapeNodeAll", &[]),
    OpcodeInfo::new(
        "InvisibleLandscapeNode",
        &[ArgSpec::string("nodeName", 4), ArgSpec::u16("recursive", 8)],
    ),
    OpcodeInfo::new("InvisibleLandscapeNodeAll", &[]),
    OpcodeInfo::new("StartManualCamera", &[]),
    OpcodeInfo::new("EndManualCamera", &[]),
    OpcodeInfo::new(
        "CameraPoint",
        &[
            ArgSpec::f32("tX", 4),
            ArgSpec::f32("tY", 8),
            ArgSpec::f32("tZ", 12),
            ArgSpec::f32("pX", 16),
            ArgSpec::f32("pY", 20),
            ArgSpec::f32("pZ", 24),
            ArgSpec::f32("twist", 28),
            ArgSpec::f32("fov", 32),
        ],
    ),
    OpcodeInfo::new("CameraPointRoot", &[]),
    OpcodeInfo::new(
        "CameraMove",
        &[ArgSpec::f32("time", 4), ArgSpec::u16("loop", 8), ArgSpec::u16("interpolateType", 10)],
    ),
    OpcodeInfo::new(
        "CameraRotateLookat",
        &[
            ArgSpec::f32("rX", 4),
            ArgSpec::f32("rY", 8),
            ArgSpec::f32("rZ", 12),
            ArgSpec::f32("time", 16),
            ArgSpec::u16("loop", 20),
            ArgSpec::u16("interpolateType", 22),
            ArgSpec::u16("divide", 24),
        ],
    ),
    OpcodeInfo::new(
        "CameraRotate",
        &[
            ArgSpec::f32("rX", 4),
            ArgSpec::f32("rY", 8),
            ArgSpec::f32("rZ", 12),
            ArgSpec::f32("time", 16),
            ArgSpec::u16("loop", 20),
            ArgSpec::u16("interpolateType", 22),
            ArgSpec::u16("divide", 24),
        ],
    ),
    OpcodeInfo::new("WaitCamera", &[ArgSpec::u16("frame", 4)]),
    OpcodeInfo::new(
        "SetFieldCamera",
        &[
            ArgSpec::f32("tX", 4),
            ArgSpec::f32("tY", 8),
            ArgSpec::f32("tZ", 12),
            ArgSpec::f32("pX", 16),
            ArgSpec::f32("pY", 20),
            ArgSpec::f32("pZ", 24),
            ArgSpec::f32("twist", 28),
            ArgSpec::f32("fov", 32),
        ],
    ),
    // 0x1C0
    OpcodeInfo::new("GuidepostVisible", &[]),
    OpcodeInfo::new("GuidepostInvisible", &[]),
    OpcodeInfo::new("GuidepostRotationZ", &[ArgSpec::f32("angleZ", 4)]),
    OpcodeInfo::new(
        "GuidepostPosition",
        &[ArgSpec::f32("x", 4), ArgSpec::f32("y", 8), ArgSpec::f32("z", 12)],
    ),
    OpcodeInfo::new("SetPathNumberOfPlayer", &[ArgSpec::u16("pathNumber", 4)]),
    OpcodeInfo::new("StartDebugTimer", &[ArgSpec::u16("reset", 4)]),
    OpcodeInfo::new(
        "StopDebugTimer",
        &[
            ArgSpec::f32("height", 4),
            ArgSpec::f32("deadFallHeight", 8),
            ArgSpec::u16("isEnableCollisionBGWall", 12),
        ],
    ),
];
