//! Demo scripts drive cutscenes: characters, cameras, messages and sound.

use super::{ArgSpec, OpcodeInfo};

/// First value past the table; never a real instruction.
pub const SENTINEL: u16 = 0x87;

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
    OpcodeInfo::new("EndInit", &[]),
    OpcodeInfo::new("EndViewer", &[]),
    OpcodeInfo::new("EndScene", &[ArgSpec::u16("disableClear", 4)]),
    OpcodeInfo::new("EndDemo", &[]),
    OpcodeInfo::new(
        "InitAddCharacter",
        &[ArgSpec::u16("instance", 4), ArgSpec::u16("id", 6), ArgSpec::u16("animationPack", 8)],
    ),
    OpcodeInfo::new(
        "InitFieldCharacter",
        &[ArgSpec::u16("instance", 4), ArgSpec::u16("id", 6), ArgSpec::u16("animationPack", 8)],
    ),
    OpcodeInfo::new(
        "InitGimmick",
        &[ArgSpec::u16("instance", 4), ArgSpec::u16("id", 6), ArgSpec::u16("animationPack", 8)],
    ),
    OpcodeInfo::new(
        "InitScene",
        &[ArgSpec::u16("vision", 4), ArgSpec::u16("field", 6), ArgSpec::u16("scene", 8)],
    ),
    // 0x10
    OpcodeInfo::new(
        "InitVoice",
        &[ArgSpec::u16("groupNormal", 4), ArgSpec::u16("groupPhantomile", 6)],
    ),
    OpcodeInfo::new("InitExtendDimmingTimer", &[]),
    OpcodeInfo::new("ChangeScene", &[ArgSpec::u16("sceneNumber", 4)]),
    OpcodeInfo::new(
        "CreateCharacter",
        &[ArgSpec::u16("instance", 4), ArgSpec::u16("isTranslucent", 6)],
    ),
    OpcodeInfo::new("CharacterColoration", &[ArgSpec::u16("instance", 4)]),
    OpcodeInfo::new("DestroyCharacter", &[ArgSpec::u16("instance", 4)]),
    OpcodeInfo::new("ShowCharacter", &[ArgSpec::u16("instance", 4), ArgSpec::u16("visible", 6)]),
    OpcodeInfo::new(
        "LandscapePauseNode",
        &[ArgSpec::string("pNodeName", 4), ArgSpec::u16("pause", 8)],
    ),
    OpcodeInfo::new(
        "CharacterPauseNode",
        &[ArgSpec::u16("instance", 4), ArgSpec::u16("pause", 6), ArgSpec::string("pNodeName", 8)],
    ),
    OpcodeInfo::new(
        "Animation",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("animationNumber", 6),
            ArgSpec::f32("interpolateTime", 8),
            ArgSpec::u16("demoInstance", 12),
            ArgSpec::u16("worldAnimation", 14),
            ArgSpec::u16("loopIn", 16),
            ArgSpec::u16("loopOut", 18),
            ArgSpec::f32("speed", 20),
            ArgSpec::u16("startFrame", 24),
        ],
    ),
    OpcodeInfo::new(
        "AnimationByName",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("worldAnimation", 6),
            ArgSpec::string("animationName", 8),
            ArgSpec::f32("interpolateTime", 12),
            ArgSpec::u16("loopIn", 16),
            ArgSpec::u16("loopOut", 18),
            ArgSpec::f32("speed", 20),
            ArgSpec::u16("startFrame", 24),
        ],
    ),
    OpcodeInfo::new("WaitAnimation", &[ArgSpec::u16("instance", 4), ArgSpec::u16("frame", 6)]),
    OpcodeInfo::new(
        "CharacterEye",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("eye", 6),
            ArgSpec::u16("animation", 8),
            ArgSpec::u16("interpolate", 10),
        ],
    ),
    OpcodeInfo::new(
        "CharacterMouth",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("mouth", 6),
            ArgSpec::u16("animation", 8),
            ArgSpec::u16("interpolate", 10),
            ArgSpec::u16("autoStop", 12),
            ArgSpec::u16("stopMouth", 14),
        ],
    ),
    OpcodeInfo::new("StopFacial", &[ArgSpec::u16("instance", 4)]),
    OpcodeInfo::new("PauseShadow", &[ArgSpec::u16("instance", 4), ArgSpec::u16("pause", 6)]),
    // 0x20
    OpcodeInfo::new(
        "AnimationScene",
        &[
            ArgSpec::u16("animationNumber", 4),
            ArgSpec::u16("loopIn", 6),
            ArgSpec::u16("loopOut", 8),
            ArgSpec::u16("dummy", 10),
            ArgSpec::f32("speed", 12),
        ],
    ),
    OpcodeInfo::new(
        "AnimationCamera",
        &[
            ArgSpec::u16("animationNumber", 4),
            ArgSpec::u16("loopIn", 6),
            ArgSpec::u16("loopOut", 8),
            ArgSpec::u16("dummy", 10),
            ArgSpec::f32("speed", 12),
            ArgSpec::u16("startFrame", 16),
        ],
    ),
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
    OpcodeInfo::new("CameraSavePoint", &[]),
    OpcodeInfo::new("CameraRestorePoint", &[]),
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
    OpcodeInfo::new("CameraShake", &[ArgSpec::f32("power", 4), ArgSpec::f32("time", 8)]),
    OpcodeInfo::new(
        "Position",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("flag", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::f32("time", 20),
            ArgSpec::u16("interpolateType", 24),
        ],
    ),
    OpcodeInfo::new(
        "Rotation",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("path", 6),
            ArgSpec::f32("angle", 8),
            ArgSpec::f32("time", 12),
            ArgSpec::u16("interpolateType", 16),
        ],
    ),
    OpcodeInfo::new(
        "RotationDirect",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("flag", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::f32("rX", 20),
            ArgSpec::f32("rY", 24),
        ],
    ),
    OpcodeInfo::new(
        "Scale",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("flag", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::f32("time", 20),
            ArgSpec::u16("interpolateType", 24),
        ],
    ),
    OpcodeInfo::new(
        "Leap",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("flag", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::f32("height", 20),
            ArgSpec::f32("time", 24),
            ArgSpec::u16("interpolateType", 28),
        ],
    ),
    OpcodeInfo::new(
        "BindFloor",
        &[ArgSpec::u16("instance", 4), ArgSpec::u16("flag", 6), ArgSpec::u16("update", 8)],
    ),
    // 0x30
    OpcodeInfo::new(
        "BindCharacter",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("parent", 6),
            ArgSpec::string("bone", 8),
            ArgSpec::u16("rotate", 12),
        ],
    ),
    OpcodeInfo::new(
        "SpinStart",
        &[ArgSpec::u16("instance", 4), ArgSpec::u16("dummy", 6), ArgSpec::f32("angle", 8)],
    ),
    OpcodeInfo::new("SpinStop", &[ArgSpec::u16("instance", 4)]),
    OpcodeInfo::new(
        "PlayEffect",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("effectNumber", 6),
            ArgSpec::u16("demoResource", 8),
            ArgSpec::u16("isTranslucent", 10),
            ArgSpec::f32("x", 12),
            ArgSpec::f32("y", 16),
            ArgSpec::f32("z", 20),
            ArgSpec::f32("rX", 24),
            ArgSpec::f32("rY", 28),
            ArgSpec::f32("rZ", 32),
            ArgSpec::f32("scale", 36),
            ArgSpec::u16("noClear", 40),
        ],
    ),
    OpcodeInfo::new(
        "PlayEffectByName",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("isTranslucent", 6),
            ArgSpec::string("effectName", 8),
            ArgSpec::f32("x", 12),
            ArgSpec::f32("y", 16),
            ArgSpec::f32("z", 20),
            ArgSpec::f32("rX", 24),
            ArgSpec::f32("rY", 28),
            ArgSpec::f32("rZ", 32),
            ArgSpec::f32("scale", 36),
            ArgSpec::u16("noClear", 40),
        ],
    ),
    OpcodeInfo::new(
        "PlayEffectBone",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("effectNumber", 6),
            ArgSpec::u16("demoResource", 8),
            ArgSpec::u16("isTranslucent", 10),
            ArgSpec::u16("characterInstance", 12),
            ArgSpec::u16("follow", 14),
            ArgSpec::string("boneName", 16),
            ArgSpec::u16("noClear", 20),
        ],
    ),
    OpcodeInfo::new(
        "PlayEffectBoneByName",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("isTranslucent", 6),
            ArgSpec::string("effectName", 8),
            ArgSpec::u16("characterInstance", 12),
            ArgSpec::u16("follow", 14),
            ArgSpec::string("boneName", 16),
            ArgSpec::u16("noClear", 20),
            ArgSpec::u16("translateOnly", 22),
        ],
    ),
    OpcodeInfo::new("StopEffect", &[ArgSpec::u16("instance", 4)]),
    OpcodeInfo::new(
        "PlayEffectSet",
        &[
            ArgSpec::string("effectSetName", 4),
            ArgSpec::u16("flag", 8),
            ArgSpec::u16("characterInstance", 10),
            ArgSpec::string("boneName", 12),
        ],
    ),
    OpcodeInfo::new("StopEffectSet", &[]),
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
    // 0x40
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
    OpcodeInfo::new("DisableBloom", &[]),
    OpcodeInfo::new(
        "EnableClampBloom",
        &[ArgSpec::u16("bias", 4), ArgSpec::u16("blend", 6), ArgSpec::u16("time", 8)],
    ),
    OpcodeInfo::new("DisableClampBloom", &[]),
    OpcodeInfo::new("EnableFlip", &[]),
    OpcodeInfo::new("DisableFlip", &[]),
    OpcodeInfo::new("ReverseFlip", &[]),
    OpcodeInfo::new(
        "PlaySound",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("number", 6),
            ArgSpec::f32("volume", 8),
            ArgSpec::f32("pan", 12),
            ArgSpec::f32("surround", 16),
            ArgSpec::u16("noClear", 20),
        ],
    ),
    OpcodeInfo::new("StopSound", &[ArgSpec::u16("instance", 4), ArgSpec::u16("time", 6)]),
    OpcodeInfo::new("WaitSound", &[ArgSpec::u16("instance", 4)]),
    OpcodeInfo::new(
        "PlayStreamSound",
        &[ArgSpec::u16("number", 4), ArgSpec::u16("track", 6), ArgSpec::f32("volume", 8)],
    ),
    OpcodeInfo::new("StopStreamSound", &[ArgSpec::u16("time", 4)]),
    OpcodeInfo::new(
        "SoundListener",
        &[ArgSpec::u16("characterInstance", 4), ArgSpec::u16("follow", 6)],
    ),
    OpcodeInfo::new(
        "SoundListenerCamera",
        &[ArgSpec::u16("lookAt", 4), ArgSpec::u16("follow", 6), ArgSpec::f32("distance", 8)],
    ),
    // 0x50
    OpcodeInfo::new(
        "SoundListenerPosition",
        &[ArgSpec::f32("x", 4), ArgSpec::f32("y", 8), ArgSpec::f32("z", 12)],
    ),
    OpcodeInfo::new(
        "Play3DSound",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("number", 6),
            ArgSpec::u16("characterInstance", 8),
            ArgSpec::u16("follow", 10),
            ArgSpec::f32("range", 12),
            ArgSpec::f32("volume", 16),
            ArgSpec::u16("disableDoppler", 20),
            ArgSpec::u16("noClear", 22),
        ],
    ),
    OpcodeInfo::new(
        "Play3DSoundPosition",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("number", 6),
            ArgSpec::f32("x", 8),
            ArgSpec::f32("y", 12),
            ArgSpec::f32("z", 16),
            ArgSpec::f32("range", 20),
            ArgSpec::f32("volume", 24),
            ArgSpec::u16("disableDoppler", 28),
            ArgSpec::u16("noClear", 30),
        ],
    ),
    OpcodeInfo::new("SoundSonicSpeed", &[ArgSpec::f32("speed", 4)]),
    OpcodeInfo::new(
        "ApplyFX",
        &[ArgSpec::u16("channel", 4), ArgSpec::u16("dummy", 6), ArgSpec::f32("rate", 8)],
    ),
    OpcodeInfo::new("UnapplyFX", &[]),
    OpcodeInfo::new(
        "PlayVoice",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("normalVoice", 6),
            ArgSpec::u16("phantomileVoice", 8),
            ArgSpec::u16("dummy", 10),
            ArgSpec::f32("volume", 12),
            ArgSpec::f32("pan", 16),
            ArgSpec::f32("surround", 20),
            ArgSpec::u16("noClear", 24),
        ],
    ),
    OpcodeInfo::new(
        "PlayVoice3D",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("normalVoice", 6),
            ArgSpec::u16("phantomileVoice", 8),
            ArgSpec::u16("characterInstance", 10),
            ArgSpec::u16("follow", 12),
            ArgSpec::u16("disableDoppler", 14),
            ArgSpec::f32("range", 16),
            ArgSpec::f32("volume", 20),
            ArgSpec::u16("noClear", 24),
        ],
    ),
    OpcodeInfo::new(
        "PlayVoice3DPosition",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("normalVoice", 6),
            ArgSpec::u16("phantomileVoice", 8),
            ArgSpec::u16("disableDoppler", 10),
            ArgSpec::f32("x", 12),
            ArgSpec::f32("y", 16),
            ArgSpec::f32("z", 20),
            ArgSpec::f32("range", 24),
            ArgSpec::f32("volume", 28),
            ArgSpec::u16("noClear", 32),
        ],
    ),
    OpcodeInfo::new("StopVoice", &[ArgSpec::u16("instance", 4), ArgSpec::u16("time", 6)]),
    OpcodeInfo::new("WaitVoice", &[ArgSpec::u16("instance", 4)]),
    OpcodeInfo::new("FadeIn", &[ArgSpec::f32("time", 4)]),
    OpcodeInfo::new("FadeOut", &[ArgSpec::f32("time", 4), ArgSpec::u16("white", 8)]),
    OpcodeInfo::new("WaitFade", &[]),
    OpcodeInfo::new("LogoStart", &[]),
    OpcodeInfo::new("LogoClear", &[]),
    // 0x60
    OpcodeInfo::new("WaitLogo", &[]),
    OpcodeInfo::new(
        "MessageOn",
        &[
            ArgSpec::u16("window", 4),
            ArgSpec::u16("number", 6),
            ArgSpec::u16("x0", 8),
            ArgSpec::u16("y0", 10),
            ArgSpec::u16("x1", 12),
            ArgSpec::u16("y1", 14),
            ArgSpec::u16("root", 16),
            ArgSpec::u16("style", 18),
            ArgSpec::f32("rootX", 20),
            ArgSpec::f32("rootY", 24),
        ],
    ),
    OpcodeInfo::new("MessageOff", &[ArgSpec::u16("window", 4)]),
    OpcodeInfo::new("WaitMessage", &[ArgSpec::u16("window", 4)]),
    OpcodeInfo::new(
        "MessageMove",
        &[
            ArgSpec::u16("window", 4),
            ArgSpec::u16("x0", 6),
            ArgSpec::u16("y0", 8),
            ArgSpec::u16("x1", 10),
            ArgSpec::u16("y1", 12),
            ArgSpec::u16("interpolateType", 14),
            ArgSpec::f32("time", 16),
        ],
    ),
    OpcodeInfo::new("MessageSpeed", &[ArgSpec::u16("window", 4), ArgSpec::u16("speed", 6)]),
    OpcodeInfo::new("MessageSpeedRate", &[ArgSpec::u16("window", 4), ArgSpec::u16("speed", 6)]),
    OpcodeInfo::new("EnableNoneArrowMode", &[ArgSpec::u16("window", 4), ArgSpec::u16("flag", 6)]),
    OpcodeInfo::new("TutorialStart", &[ArgSpec::u16("id", 4)]),
    OpcodeInfo::new("TutorialEnd", &[]),
    OpcodeInfo::new("WaitTutorialEnd", &[]),
    OpcodeInfo::new("WaitTutorialDraw", &[]),
    OpcodeInfo::new("OpeningTextStart", &[ArgSpec::u16("animId", 4)]),
    OpcodeInfo::new("WaitOpeningText", &[]),
    OpcodeInfo::new(
        "SendEvent",
        &[
            ArgSpec::u16("instance", 4),
            ArgSpec::u16("eventNumber", 6),
            ArgSpec::f32("param0", 8),
            ArgSpec::f32("param1", 12),
        ],
    ),
    OpcodeInfo::new(
        "SendEventById",
        &[
            ArgSpec::u16("characterId", 4),
            ArgSpec::u16("eventNumber", 6),
            ArgSpec::f32("param0", 8),
            ArgSpec::f32("param1", 12),
        ],
    ),
    // 0x70
    OpcodeInfo::new("ZoomBlur", &[ArgSpec::u16("onOff", 4), ArgSpec::u16("time", 6)]),
    OpcodeInfo::new(
        "ColorTile",
        &[
            ArgSpec::u16("r", 4),
            ArgSpec::u16("g", 6),
            ArgSpec::u16("b", 8),
            ArgSpec::u16("a", 10),
            ArgSpec::u16("time", 12),
        ],
    ),
    OpcodeInfo::new(
        "StartFirework",
        &[
            ArgSpec::f32("tX", 4),
            ArgSpec::f32("tY", 8),
            ArgSpec::f32("tZ", 12),
            ArgSpec::f32("rX", 16),
            ArgSpec::f32("rY", 20),
            ArgSpec::f32("rZ", 24),
            ArgSpec::f32("interval", 28),
        ],
    ),
    OpcodeInfo::new("StopFirework", &[]),
    OpcodeInfo::new("SkipFadeColor", &[ArgSpec::u16("white", 4)]),
    OpcodeInfo::new("EnableSkipFade", &[]),
    OpcodeInfo::new("DisableSkipFade", &[]),
    OpcodeInfo::new("EnableSkip", &[]),
    OpcodeInfo::new("DisableSkip", &[]),
    OpcodeInfo::new("TimerStart", &[]),
    OpcodeInfo::new("TimerPrint", &[]),
    OpcodeInfo::new("InitBook", &[]),
    OpcodeInfo::new("BookPage", &[ArgSpec::u16("instance", 4), ArgSpec::u16("page", 6)]),
    OpcodeInfo::new("BookName", &[ArgSpec::u16("instance", 4)]),
    OpcodeInfo::new("EnablePadCheck", &[]),
    OpcodeInfo::new("DisablePadCheck", &[]),
    // 0x80
    OpcodeInfo::new("ResetPadDimmingCount", &[]),
    OpcodeInfo::new("WaitIfKeyOn", &[ArgSpec::u16("keyType", 4)]),
    OpcodeInfo::new("SetUserValue", &[ArgSpec::u16("value", 4)]),
    OpcodeInfo::new(
        "JumpIfUserValue",
        &[ArgSpec::u16("value", 4), ArgSpec::u16("compareType", 6), ArgSpec::u16("label", 8)],
    ),
    OpcodeInfo::new("ResetKlonoaHair", &[ArgSpec::u16("instance", 4)]),
    OpcodeInfo::new("SleepKlonoaHair", &[ArgSpec::u16("instance", 4), ArgSpec::u16("bool", 6)]),
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
];
