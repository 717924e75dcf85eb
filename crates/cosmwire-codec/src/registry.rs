//! Message type registry for dynamic message dispatch
//!
//! Maps type URLs to decoders so an `Any` can be opened without knowing its
//! concrete type at compile time, and maps legacy amino names back to type
//! URLs so an Amino envelope can be turned into an `Any`.

use crate::amino::{AminoConvert, AminoMsg};
use crate::error::{CodecError, Result};
use crate::protobuf::{Any, MessageExt};
use std::any::Any as StdAny;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace};

/// Message type registry
pub struct TypeRegistry {
    /// Map from type URL to message descriptor
    types: RwLock<HashMap<String, Arc<dyn MessageDescriptor>>>,
    /// Map from amino name to type URL
    amino_index: RwLock<HashMap<String, String>>,
}

impl TypeRegistry {
    /// Create a new empty type registry
    pub fn new() -> Self {
        Self {
            types: RwLock::new(HashMap::new()),
            amino_index: RwLock::new(HashMap::new()),
        }
    }

    /// Register a message type
    ///
    /// Returns `false` without touching the registry when the type URL is
    /// already present. When two types share an amino name, the first one
    /// registered keeps it.
    pub fn register<M>(&self) -> bool
    where
        M: MessageExt + AminoConvert + Clone + fmt::Debug + Send + Sync + 'static,
    {
        {
            let mut types = self.types.write().unwrap_or_else(PoisonError::into_inner);
            if types.contains_key(M::TYPE_URL) {
                trace!(type_url = M::TYPE_URL, "type already registered");
                return false;
            }
            types.insert(
                M::TYPE_URL.to_string(),
                Arc::new(ConcreteMessageDescriptor::<M>::new()),
            );
        }

        let mut index = self
            .amino_index
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match index.get(M::AMINO_TYPE) {
            Some(existing) => trace!(
                amino_type = M::AMINO_TYPE,
                kept = %existing,
                skipped = M::TYPE_URL,
                "amino name already bound"
            ),
            None => {
                index.insert(M::AMINO_TYPE.to_string(), M::TYPE_URL.to_string());
            }
        }
        debug!(type_url = M::TYPE_URL, amino_type = M::AMINO_TYPE, "registered type");
        true
    }

    /// Check if a type URL is registered
    pub fn contains(&self, type_url: &str) -> bool {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(type_url)
    }

    /// Get all registered type URLs, sorted
    pub fn type_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self
            .types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        urls.sort();
        urls
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Amino name registered for a type URL
    pub fn amino_type_for(&self, type_url: &str) -> Option<&'static str> {
        self.descriptor(type_url).ok().map(|d| d.amino_type())
    }

    /// Type URL bound to an amino name
    pub fn type_url_for_amino(&self, amino_type: &str) -> Option<String> {
        self.amino_index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(amino_type)
            .cloned()
    }

    /// Encode a dynamic message into an `Any`, provided its type is known
    pub fn wrap_any(&self, msg: &dyn MessageDyn) -> Result<Any> {
        let type_url = msg.dyn_type_url();
        if !self.contains(type_url) {
            return Err(CodecError::TypeNotFound(type_url.to_string()));
        }
        Ok(msg.to_any())
    }

    /// Decode an `Any` into its registered concrete type
    pub fn unwrap_any(&self, any: &Any) -> Result<Box<dyn MessageDyn>> {
        self.descriptor(&any.type_url)?.decode(&any.value)
    }

    /// Create a default instance of a message by type URL
    pub fn create_default(&self, type_url: &str) -> Result<Box<dyn MessageDyn>> {
        Ok(self.descriptor(type_url)?.create_default())
    }

    /// Convert an `Any` into its Amino envelope
    pub fn any_to_amino_msg(&self, any: &Any) -> Result<AminoMsg> {
        self.unwrap_any(any)?.dyn_to_amino_msg()
    }

    /// Convert an Amino envelope into an `Any`
    pub fn amino_msg_to_any(&self, msg: &AminoMsg) -> Result<Any> {
        let type_url = self
            .type_url_for_amino(&msg.r#type)
            .ok_or_else(|| CodecError::AminoTypeNotFound(msg.r#type.clone()))?;
        let decoded = self
            .descriptor(&type_url)?
            .from_amino_json(msg.value.clone())?;
        Ok(decoded.to_any())
    }

    /// Amino JSON envelope of an `Any`, as a JSON value
    pub fn any_to_json(&self, any: &Any) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.any_to_amino_msg(any)?)?)
    }

    // The lock is released before the descriptor runs, since decoding a
    // message with nested `Any` fields re-enters the registry.
    fn descriptor(&self, type_url: &str) -> Result<Arc<dyn MessageDescriptor>> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_url)
            .cloned()
            .ok_or_else(|| CodecError::TypeNotFound(type_url.to_string()))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.type_urls())
            .finish()
    }
}

/// Object-safe view of a registered message
pub trait MessageDyn: fmt::Debug + Send + Sync {
    fn dyn_type_url(&self) -> &'static str;

    fn dyn_amino_type(&self) -> &'static str;

    /// Protobuf encoding of the message
    fn dyn_encode(&self) -> Vec<u8>;

    fn dyn_to_amino_msg(&self) -> Result<AminoMsg>;

    /// Clone the message as a boxed trait object
    fn clone_box(&self) -> Box<dyn MessageDyn>;

    fn as_any(&self) -> &dyn StdAny;
}

impl dyn MessageDyn + '_ {
    /// Borrow as the concrete message type
    pub fn downcast_ref<M: 'static>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }

    /// Encode into an `Any`
    pub fn to_any(&self) -> Any {
        Any {
            type_url: self.dyn_type_url().to_string(),
            value: self.dyn_encode(),
        }
    }
}

impl Clone for Box<dyn MessageDyn> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl<M> MessageDyn for M
where
    M: MessageExt + AminoConvert + Clone + fmt::Debug + Send + Sync + 'static,
{
    fn dyn_type_url(&self) -> &'static str {
        M::TYPE_URL
    }

    fn dyn_amino_type(&self) -> &'static str {
        M::AMINO_TYPE
    }

    fn dyn_encode(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    fn dyn_to_amino_msg(&self) -> Result<AminoMsg> {
        self.to_amino_msg()
    }

    fn clone_box(&self) -> Box<dyn MessageDyn> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn StdAny {
        self
    }
}

/// Message descriptor for type registry
trait MessageDescriptor: Send + Sync {
    fn amino_type(&self) -> &'static str;

    fn decode(&self, data: &[u8]) -> Result<Box<dyn MessageDyn>>;

    fn create_default(&self) -> Box<dyn MessageDyn>;

    fn from_amino_json(&self, value: serde_json::Value) -> Result<Box<dyn MessageDyn>>;
}

/// Concrete implementation of MessageDescriptor
struct ConcreteMessageDescriptor<M> {
    _phantom: std::marker::PhantomData<fn() -> M>,
}

impl<M> ConcreteMessageDescriptor<M> {
    fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<M> MessageDescriptor for ConcreteMessageDescriptor<M>
where
    M: MessageExt + AminoConvert + Clone + fmt::Debug + Send + Sync + 'static,
{
    fn amino_type(&self) -> &'static str {
        M::AMINO_TYPE
    }

    fn decode(&self, data: &[u8]) -> Result<Box<dyn MessageDyn>> {
        let msg = M::decode(data)?;
        Ok(Box::new(msg))
    }

    fn create_default(&self) -> Box<dyn MessageDyn> {
        Box::new(M::default())
    }

    fn from_amino_json(&self, value: serde_json::Value) -> Result<Box<dyn MessageDyn>> {
        Ok(Box::new(M::from_amino_json(value)?))
    }
}

lazy_static::lazy_static! {
    /// Global type registry instance
    ///
    /// Starts empty; message crates fill it with an explicit registration
    /// pass at startup.
    pub static ref GLOBAL_TYPE_REGISTRY: Arc<TypeRegistry> = Arc::new(TypeRegistry::new());
}

/// Helper macro to register multiple types at once
#[macro_export]
macro_rules! register_types {
    ($registry:expr, [$($ty:ty),+ $(,)?]) => {
        $(
            $registry.register::<$ty>();
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TestMessage {
        #[prost(string, tag = "1")]
        pub content: String,
        #[prost(uint64, tag = "2")]
        pub value: u64,
    }

    crate::cosmos_message!(TestMessage => TestMessageAmino, TestMessagePartial;
        "/test.TestMessage", "test/TestMessage" {
            content: string,
            value: uint64,
        });

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Envelope {
        #[prost(message, optional, tag = "1")]
        pub inner: Option<Any>,
        #[prost(message, repeated, tag = "2")]
        pub items: Vec<Any>,
    }

    crate::cosmos_message!(Envelope => EnvelopeAmino, EnvelopePartial;
        "/test.Envelope", "test/Envelope" {
            inner: any,
            items: anys,
        });

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SameName {
        #[prost(bool, tag = "1")]
        pub flag: bool,
    }

    crate::cosmos_message!(SameName => SameNameAmino, SameNamePartial;
        "/test.v2.TestMessage", "test/TestMessage" {
            flag: bool,
        });

    fn sample() -> TestMessage {
        TestMessage {
            content: "hello".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_type_registry() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register::<TestMessage>());
        assert!(!registry.register::<TestMessage>());
        assert!(registry.contains("/test.TestMessage"));
        assert!(!registry.contains("/test.Unknown"));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.amino_type_for("/test.TestMessage"),
            Some("test/TestMessage")
        );

        let any = sample().to_any();
        let decoded = registry.unwrap_any(&any).unwrap();
        assert_eq!(decoded.dyn_type_url(), "/test.TestMessage");
        assert_eq!(decoded.downcast_ref::<TestMessage>(), Some(&sample()));
        assert_eq!(decoded.clone().to_any(), any);

        let default = registry.create_default("/test.TestMessage").unwrap();
        assert_eq!(
            default.downcast_ref::<TestMessage>(),
            Some(&TestMessage::default())
        );
    }

    fn wrap_borrowed(registry: &TypeRegistry, msg: &dyn MessageDyn) -> Result<Any> {
        registry.wrap_any(msg)
    }

    #[test]
    fn test_wrap_borrowed_message() {
        let registry = TypeRegistry::new();
        registry.register::<TestMessage>();

        let msg = sample();
        let any = wrap_borrowed(&registry, &msg).unwrap();
        assert_eq!(any, msg.to_any());

        let dynamic: &dyn MessageDyn = &msg;
        assert_eq!(dynamic.downcast_ref::<TestMessage>(), Some(&msg));
        assert_eq!(dynamic.to_any().type_url, "/test.TestMessage");
    }

    #[test]
    fn test_unknown_type() {
        let registry = TypeRegistry::new();
        let any = sample().to_any();
        assert!(matches!(
            registry.unwrap_any(&any),
            Err(CodecError::TypeNotFound(_))
        ));
        assert!(matches!(
            registry.wrap_any(&sample()),
            Err(CodecError::TypeNotFound(_))
        ));
        let msg = AminoMsg {
            r#type: "test/Nope".to_string(),
            value: serde_json::Value::Null,
        };
        assert!(matches!(
            registry.amino_msg_to_any(&msg),
            Err(CodecError::AminoTypeNotFound(_))
        ));
    }

    #[test]
    fn test_amino_through_registry() {
        let registry = TypeRegistry::new();
        registry.register::<TestMessage>();

        let any = registry.wrap_any(&sample()).unwrap();
        let amino = registry.any_to_amino_msg(&any).unwrap();
        assert_eq!(amino.r#type, "test/TestMessage");
        assert_eq!(
            amino.value,
            serde_json::json!({ "content": "hello", "value": "42" })
        );
        assert_eq!(registry.amino_msg_to_any(&amino).unwrap(), any);
        assert_eq!(
            registry.any_to_json(&any).unwrap()["type"],
            "test/TestMessage"
        );
    }

    #[test]
    fn test_first_amino_name_wins() {
        let registry = TypeRegistry::new();
        registry.register::<TestMessage>();
        assert!(registry.register::<SameName>());
        assert_eq!(
            registry.type_url_for_amino("test/TestMessage").as_deref(),
            Some("/test.TestMessage")
        );
        assert!(registry.contains("/test.v2.TestMessage"));
    }

    #[test]
    fn test_nested_any_uses_global_registry() {
        GLOBAL_TYPE_REGISTRY.register::<TestMessage>();
        GLOBAL_TYPE_REGISTRY.register::<Envelope>();

        let envelope = Envelope {
            inner: Some(sample().to_any()),
            items: vec![sample().to_any(), TestMessage::default().to_any()],
        };
        let amino = GLOBAL_TYPE_REGISTRY
            .any_to_amino_msg(&envelope.to_any())
            .unwrap();
        assert_eq!(
            amino.value["inner"],
            serde_json::json!({
                "type": "test/TestMessage",
                "value": { "content": "hello", "value": "42" }
            })
        );
        assert_eq!(amino.value["items"][1]["value"], serde_json::json!({}));

        let back = GLOBAL_TYPE_REGISTRY.amino_msg_to_any(&amino).unwrap();
        assert_eq!(Envelope::decode(back.value.as_slice()).unwrap(), envelope);
    }

    #[test]
    fn test_register_types_macro() {
        let registry = TypeRegistry::new();
        register_types!(registry, [TestMessage, Envelope]);
        assert_eq!(
            registry.type_urls(),
            vec!["/test.Envelope".to_string(), "/test.TestMessage".to_string()]
        );
    }
}
