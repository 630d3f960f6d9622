use anyhow::Result;
use log::debug;
use tether_agent::{ChannelDefinition, ChannelOptionsBuilder, TetherAgent};

use crate::{
    backend_config::HandSkeletonConfig,
    tracking::{Bone, TrackedLandmark},
};

pub struct Outputs {
    pub config_output: ChannelDefinition,
    pub landmarks_output: ChannelDefinition,
    pub bones_output: ChannelDefinition,
    pub presence_output: ChannelDefinition,
}

impl Outputs {
    pub fn new(tether_agent: &mut TetherAgent) -> Result<Outputs> {
        let config_output = ChannelOptionsBuilder::create_sender("provideHandSkeletonConfig")
            .qos(Some(2))
            .retain(Some(true))
            .build(tether_agent)?;

        let landmarks_output = ChannelOptionsBuilder::create_sender("handLandmarks")
            .qos(Some(0))
            .build(tether_agent)?;

        let bones_output = ChannelOptionsBuilder::create_sender("handBones")
            .qos(Some(0))
            .build(tether_agent)?;

        // Hand found / lost
        let presence_output = ChannelOptionsBuilder::create_sender("handPresence")
            .qos(Some(2))
            .build(tether_agent)?;

        Ok(Outputs {
            config_output,
            landmarks_output,
            bones_output,
            presence_output,
        })
    }

    pub fn publish_config(
        &self,
        tether_agent: &TetherAgent,
        config: &HandSkeletonConfig,
    ) -> Result<()> {
        let payload = rmp_serde::to_vec_named(config)?;
        tether_agent.send(&self.config_output, Some(&payload))?;
        Ok(())
    }

    pub fn publish_landmarks(
        &self,
        tether_agent: &TetherAgent,
        landmarks: &[TrackedLandmark],
    ) -> Result<()> {
        let payload = rmp_serde::to_vec_named(landmarks)?;
        tether_agent.send(&self.landmarks_output, Some(&payload))?;
        Ok(())
    }

    pub fn publish_bones(&self, tether_agent: &TetherAgent, bones: &[Bone]) -> Result<()> {
        let payload = rmp_serde::to_vec_named(bones)?;
        tether_agent.send(&self.bones_output, Some(&payload))?;
        Ok(())
    }

    pub fn publish_presence(&self, tether_agent: &TetherAgent, active: bool) -> Result<()> {
        debug!("Hand presence changed: {}", active);
        let payload: &[u8] = if active { &[1] } else { &[0] };
        tether_agent.send(&self.presence_output, Some(payload))?;
        Ok(())
    }
}
