use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Planet {
    id: u8,
    name: String,
    moons: u32,
}

impl ActorEntity for Planet {
    type Id = u8;

    fn id(&self) -> u8 {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id == 0 {
            return Err("id must be positive".to_string());
        }
        Ok(())
    }
}

fn planet(id: u8, name: &str, moons: u32) -> Planet {
    Planet {
        id,
        name: name.to_string(),
        moons,
    }
}

fn solar_system() -> Vec<Planet> {
    vec![
        planet(3, "Earth", 1),
        planet(4, "Mars", 2),
        planet(5, "Jupiter", 95),
    ]
}

// --- Domain Client ---

#[derive(Debug, thiserror::Error)]
#[error("planet store unavailable: {0}")]
struct PlanetError(String);

#[derive(Clone)]
struct PlanetClient {
    inner: ResourceClient<Planet>,
}

#[async_trait]
impl ActorClient<Planet> for PlanetClient {
    type Error = PlanetError;

    fn inner(&self) -> &ResourceClient<Planet> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PlanetError(e.to_string())
    }
}

#[tokio::test]
async fn test_queries_through_domain_client() {
    let (actor, inner) = ResourceActor::new(8, solar_system()).unwrap();
    let handle = tokio::spawn(actor.run());
    let client = PlanetClient { inner };

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Earth", "Mars", "Jupiter"]);

    for expected in solar_system() {
        let found = client.get(expected.id).await.unwrap();
        assert_eq!(found, Some(expected));
    }
    assert_eq!(client.get(9).await.unwrap(), None);

    // Dropping the last client stops the actor.
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_readers_see_the_same_collection() {
    let (actor, client) = ResourceActor::new(2, solar_system()).unwrap();
    tokio::spawn(actor.run());

    let mut handles = vec![];
    for i in 0..20u8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let id = 3 + (i % 4);
            client.get(id).await
        }));
    }

    let mut found = 0;
    let mut missing = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            Some(_) => found += 1,
            None => missing += 1,
        }
    }
    assert_eq!(found, 15);
    assert_eq!(missing, 5);
}

#[tokio::test]
async fn test_stopped_actor_maps_to_domain_error() {
    let (actor, inner) = ResourceActor::new(8, solar_system()).unwrap();
    drop(actor);
    let client = PlanetClient { inner };

    let err = client.list().await.unwrap_err();
    assert_eq!(err.to_string(), "planet store unavailable: Actor closed");
}

#[test]
fn test_invalid_seed_never_starts() {
    let result = ResourceActor::new(8, vec![planet(0, "Vulcan", 0)]);
    assert!(matches!(
        result,
        Err(FrameworkError::InvalidEntity { ref id, .. }) if id == "0"
    ));
}
