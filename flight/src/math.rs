// Shared math types are bevy_math's glam types, so hosts running on Bevy pass
// their own vectors and rotations straight through.
pub type Vec3f = bevy_math::Vec3;
pub type Quatf = bevy_math::Quat;
