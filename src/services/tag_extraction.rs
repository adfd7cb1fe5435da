
use crate::contracts::annotation::AnnotationRequest;
use crate::contracts::platform_metadata::{Ec2Metadata, OpsWorksMetadata, PlatformMetadata};

/// Tags derived from the cloud platform the host runs on, in a stable order:
/// EC2 security groups, availability zone, instance type, then OpsWorks stack,
/// layers and application name/type pairs.
pub fn extract_cloud_tags(metadata: &PlatformMetadata) -> Vec<String> {
    let mut tags = Vec::new();
    if let Some(ec2) = &metadata.ec2 {
        tags.extend(ec2_tags(ec2));
    }
    if let Some(opsworks) = &metadata.opsworks {
        tags.extend(opsworks_tags(opsworks));
    }
    tags
}

pub fn ec2_tags(ec2: &Ec2Metadata) -> Vec<String> {
    ec2.security_groups
        .iter()
        .cloned()
        .chain(ec2.placement_availability_zone.clone())
        .chain(ec2.instance_type.clone())
        .collect()
}

pub fn opsworks_tags(opsworks: &OpsWorksMetadata) -> Vec<String> {
    let stack = opsworks.stack.as_ref().and_then(|stack| stack.name.clone());
    let layers = opsworks
        .instance
        .iter()
        .flat_map(|instance| instance.layers.iter().cloned());
    let applications = opsworks
        .applications
        .iter()
        .flat_map(|app| app.name.iter().chain(app.application_type.iter()).cloned());

    stack.into_iter().chain(layers).chain(applications).collect()
}

/// The annotation marking the OpsWorks lifecycle event in progress, if any
pub fn extract_lifecycle_annotation(metadata: &PlatformMetadata) -> Option<AnnotationRequest> {
    let opsworks = metadata.opsworks.as_ref()?;
    let activity = opsworks.activity.as_ref()?;

    let mut tags = vec!["opsworks".to_string(), "ec2".to_string()];
    tags.extend(opsworks_tags(opsworks));

    Some(AnnotationRequest::new(
        format!("OpsWorks Life Cycle Event on {}", metadata.host_name()),
        activity.clone(),
        tags,
    ))
}
