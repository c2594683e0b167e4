//! Service Description Use Case
//!
//! Orchestrates the synchronization flow for a description:
//! 1. Check the caller's capability
//! 2. Load the owning client aggregate (under its lock)
//! 3. Parse the source into candidate operations
//! 4. Reject name collisions with sibling descriptions
//! 5. Collect validator and change warnings
//! 6. Commit the whole aggregate, or reject and write nothing
//!
//! This use case is pure orchestration - conflict and change rules live in
//! domain services.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::ClientLocks;
use crate::domain::entities::{Client, Operation, ServiceDescription};
use crate::domain::ports::{
    AllowAll, AuthorizationGate, ClientRepository, Clock, DescriptionReader,
    DescriptionValidator, NoopEventSink, ParsedOperation, ReadError, StoreResult, SyncAction,
    SyncEvent, SyncEventSink, SystemClock,
};
use crate::domain::services::{ChangeChecker, ChangeSet, ConflictDetector, ConflictScope};
use crate::domain::value_objects::{
    is_valid_source_url, Capability, ClientId, DescriptionId, Warning,
};
use crate::error::{SyncError, SyncResult};

use super::options::SyncOptions;
use super::result::SyncOutcome;

/// Where a resync takes its source from.
#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    /// Re-pull the description's current locator.
    Current,
    /// Switch the description to a new locator.
    Replace(&'a str),
}

/// Synchronization engine for service descriptions.
///
/// Collaborators are injected as ports so the engine can run against any
/// store, reader and validator.
pub struct ServiceDescriptionUseCase {
    repository: Arc<dyn ClientRepository>,
    reader: Arc<dyn DescriptionReader>,
    validator: Arc<dyn DescriptionValidator>,
    gate: Arc<dyn AuthorizationGate>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn SyncEventSink>,
    locks: ClientLocks,
    options: SyncOptions,
    conflict_detector: ConflictDetector,
    change_checker: ChangeChecker,
}

impl ServiceDescriptionUseCase {
    pub fn new(
        repository: Arc<dyn ClientRepository>,
        reader: Arc<dyn DescriptionReader>,
        validator: Arc<dyn DescriptionValidator>,
    ) -> Self {
        Self {
            repository,
            reader,
            validator,
            gate: Arc::new(AllowAll),
            clock: Arc::new(SystemClock),
            events: Arc::new(NoopEventSink),
            locks: ClientLocks::new(),
            options: SyncOptions::default(),
            conflict_detector: ConflictDetector::new(),
            change_checker: ChangeChecker::new(),
        }
    }

    pub fn with_gate(mut self, gate: Arc<dyn AuthorizationGate>) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_events(mut self, events: Arc<dyn SyncEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub fn get_description(&self, id: DescriptionId) -> SyncResult<ServiceDescription> {
        self.gate.check(Capability::ViewDescription)?;
        self.repository
            .load_description(id)?
            .ok_or_else(|| description_not_found(id))
    }

    /// Register a new WSDL description for a client.
    ///
    /// The description is created disabled. Validator warnings block the
    /// registration unless `ignore_warnings` is set.
    pub fn add_wsdl_description(
        &self,
        client_id: &ClientId,
        url: &str,
        ignore_warnings: bool,
    ) -> SyncResult<SyncOutcome> {
        self.gate.check(Capability::AddDescription)?;
        self.events.on_event(SyncEvent::Started {
            action: SyncAction::Register,
            client_id: client_id.clone(),
            url: url.to_string(),
        });

        let result = self.locks.with_lock(client_id, || {
            self.register(client_id, url, ignore_warnings)
        });
        self.report(SyncAction::Register, url, result)
    }

    /// Point an existing WSDL description at a new source and resync it.
    pub fn update_wsdl_url(
        &self,
        id: DescriptionId,
        url: &str,
        ignore_warnings: bool,
    ) -> SyncResult<SyncOutcome> {
        self.gate.check(Capability::EditDescription)?;
        self.resync(SyncAction::UpdateSource, id, Source::Replace(url), ignore_warnings)
    }

    /// Re-pull a description's current source.
    pub fn refresh_description(
        &self,
        id: DescriptionId,
        ignore_warnings: bool,
    ) -> SyncResult<SyncOutcome> {
        self.gate.check(Capability::RefreshDescription)?;
        self.resync(SyncAction::Refresh, id, Source::Current, ignore_warnings)
    }

    /// Remove a description from its owning client.
    pub fn delete_description(&self, id: DescriptionId) -> SyncResult<ServiceDescription> {
        self.gate.check(Capability::DeleteDescription)?;
        let owner = self.owner_of(id)?;

        self.locks.with_lock(&owner, || {
            let _lease = self.repository.lock_client(&owner)?;
            let mut client = self.load_owner(&owner, id)?;
            let removed = client
                .remove_description(id)
                .ok_or_else(|| description_not_found(id))?;
            self.repository.save_client(&client)?;

            info!(client = %owner, id = %id, url = %removed.url, "deleted service description");
            self.events.on_event(SyncEvent::Deleted {
                client_id: owner.clone(),
                description_id: id,
            });
            Ok(removed)
        })
    }

    pub fn enable_descriptions(
        &self,
        ids: &[DescriptionId],
    ) -> SyncResult<Vec<ServiceDescription>> {
        self.gate.check(Capability::EnableDisableDescription)?;
        self.toggle(ids, true, None)
    }

    pub fn disable_descriptions(
        &self,
        ids: &[DescriptionId],
        notice: Option<&str>,
    ) -> SyncResult<Vec<ServiceDescription>> {
        self.gate.check(Capability::EnableDisableDescription)?;
        self.toggle(ids, false, notice)
    }

    fn register(
        &self,
        client_id: &ClientId,
        url: &str,
        ignore_warnings: bool,
    ) -> SyncResult<SyncOutcome> {
        let _lease = self.repository.lock_client(client_id)?;
        let mut client =
            self.repository
                .load_client(client_id)?
                .ok_or_else(|| SyncError::ClientNotFound {
                    client_id: client_id.clone(),
                })?;

        ensure_valid_url(url)?;
        if client.has_source(url, None) {
            return Err(SyncError::SourceExists {
                url: url.to_string(),
            });
        }

        let candidates = self.parse(url)?;
        self.ensure_no_conflicts(&client, &candidates, ConflictScope::AllDescriptions, url)?;

        let mut warnings = self.validation_warnings(url)?;
        let changes = self.change_checker.check(&[], &candidates);
        if self.options.warn_on_initial_additions {
            warnings.extend(changes.to_warnings());
        }
        let accepted_warnings = self.gate_warnings(url, warnings, ignore_warnings)?;

        let id = self.repository.next_description_id()?;
        let description = ServiceDescription::new_wsdl(
            id,
            client_id.clone(),
            url,
            &self.options.default_disabled_notice,
            self.clock.now(),
            candidates,
        );
        client.add_description(description.clone());
        self.repository.save_client(&client)?;

        self.committed(SyncAction::Register, &description, &changes);
        Ok(SyncOutcome {
            description,
            changes,
            accepted_warnings,
        })
    }

    fn resync(
        &self,
        action: SyncAction,
        id: DescriptionId,
        source: Source<'_>,
        ignore_warnings: bool,
    ) -> SyncResult<SyncOutcome> {
        let owner = self.owner_of(id)?;

        self.locks.with_lock(&owner, || {
            let _lease = self.repository.lock_client(&owner)?;
            let mut client = self.load_owner(&owner, id)?;
            let url = match source {
                Source::Replace(url) => url.to_string(),
                Source::Current => client
                    .description(id)
                    .map(|d| d.url.clone())
                    .ok_or_else(|| description_not_found(id))?,
            };
            self.events.on_event(SyncEvent::Started {
                action,
                client_id: owner.clone(),
                url: url.clone(),
            });

            let result =
                self.resync_description(action, &mut client, id, source, &url, ignore_warnings);
            self.report(action, &url, result)
        })
    }

    fn resync_description(
        &self,
        action: SyncAction,
        client: &mut Client,
        id: DescriptionId,
        source: Source<'_>,
        url: &str,
        ignore_warnings: bool,
    ) -> SyncResult<SyncOutcome> {
        let kind = client
            .description(id)
            .map(|d| d.kind)
            .ok_or_else(|| description_not_found(id))?;

        match source {
            Source::Replace(_) => {
                if !kind.is_wsdl() {
                    return Err(SyncError::WrongType { id });
                }
                ensure_valid_url(url)?;
                if client.has_source(url, Some(id)) {
                    return Err(SyncError::SourceExists {
                        url: url.to_string(),
                    });
                }
            }
            Source::Current => {
                if !kind.is_wsdl() {
                    return Err(SyncError::Unimplemented { kind });
                }
            }
        }

        let candidates = self.parse(url)?;
        self.ensure_no_conflicts(client, &candidates, ConflictScope::Excluding(id), url)?;

        let mut warnings = self.validation_warnings(url)?;
        let changes = self.changes_against(client, id, &candidates)?;
        warnings.extend(changes.to_warnings());
        let accepted_warnings = self.gate_warnings(url, warnings, ignore_warnings)?;

        let now = self.clock.now();
        let description = client
            .description_mut(id)
            .ok_or_else(|| description_not_found(id))?;
        description.url = url.to_string();
        description.replace_operations(candidates, now);
        let description = description.clone();
        self.repository.save_client(client)?;

        self.committed(action, &description, &changes);
        Ok(SyncOutcome {
            description,
            changes,
            accepted_warnings,
        })
    }

    fn toggle(
        &self,
        ids: &[DescriptionId],
        enable: bool,
        notice: Option<&str>,
    ) -> SyncResult<Vec<ServiceDescription>> {
        let unique: BTreeSet<DescriptionId> = ids.iter().copied().collect();
        let mut owners: BTreeMap<ClientId, Vec<DescriptionId>> = BTreeMap::new();
        let mut missing = Vec::new();
        for id in &unique {
            match self.repository.load_description(*id)? {
                Some(description) => owners.entry(description.client_id).or_default().push(*id),
                None => missing.push(*id),
            }
        }
        if !missing.is_empty() {
            return Err(SyncError::DescriptionsNotFound { ids: missing });
        }

        self.locks.with_locks(owners.keys(), || {
            let _leases = owners
                .keys()
                .map(|owner| self.repository.lock_client(owner))
                .collect::<StoreResult<Vec<_>>>()?;

            let mut originals = Vec::with_capacity(owners.len());
            let mut changed = Vec::with_capacity(owners.len());
            let mut updated = Vec::with_capacity(unique.len());
            let mut missing = Vec::new();
            for (owner, owned) in &owners {
                let Some(mut client) = self.repository.load_client(owner)? else {
                    missing.extend(owned.iter().copied());
                    continue;
                };
                originals.push(client.clone());
                for id in owned {
                    let Some(description) = client.description_mut(*id) else {
                        missing.push(*id);
                        continue;
                    };
                    if enable {
                        description.enable();
                    } else {
                        description.disable(notice);
                    }
                    updated.push(description.clone());
                }
                changed.push(client);
            }
            if !missing.is_empty() {
                missing.sort();
                return Err(SyncError::DescriptionsNotFound { ids: missing });
            }

            self.save_all(&changed, &originals)?;

            let description_ids: Vec<DescriptionId> = updated.iter().map(|d| d.id).collect();
            info!(count = description_ids.len(), enabled = enable, "toggled service descriptions");
            self.events.on_event(SyncEvent::Toggled {
                description_ids,
                enabled: enable,
            });
            Ok(updated)
        })
    }

    /// Save every changed client. When one save fails, the clients already
    /// written are put back to `originals` before the error is returned.
    fn save_all(&self, changed: &[Client], originals: &[Client]) -> SyncResult<()> {
        for (index, client) in changed.iter().enumerate() {
            if let Err(err) = self.repository.save_client(client) {
                for original in &originals[..index] {
                    if let Err(restore) = self.repository.save_client(original) {
                        error!(client = %original.id, error = %restore, "failed to restore client");
                    }
                }
                return Err(err.into());
            }
        }
        Ok(())
    }

    fn owner_of(&self, id: DescriptionId) -> SyncResult<ClientId> {
        self.repository
            .load_description(id)?
            .map(|description| description.client_id)
            .ok_or_else(|| description_not_found(id))
    }

    /// Load the owning client once its lock is held. A description deleted
    /// in between reads as not found.
    fn load_owner(&self, owner: &ClientId, id: DescriptionId) -> SyncResult<Client> {
        self.repository
            .load_client(owner)?
            .filter(|client| client.description(id).is_some())
            .ok_or_else(|| description_not_found(id))
    }

    fn parse(&self, url: &str) -> SyncResult<Vec<Operation>> {
        let parsed = self.reader.read(url).map_err(|err| match err {
            ReadError::Parse { message } => SyncError::InvalidWsdl {
                url: url.to_string(),
                message,
            },
            ReadError::Unreachable { message } => SyncError::WsdlDownloadFailed {
                url: url.to_string(),
                message,
            },
        })?;

        // A source declaring one full name twice keeps its first declaration.
        let declared = parsed.len();
        let mut seen = HashSet::new();
        let operations: Vec<Operation> = parsed
            .into_iter()
            .map(|operation| self.to_operation(operation))
            .filter(|operation| seen.insert(operation.full_name()))
            .collect();

        debug!(
            url,
            operations = operations.len(),
            duplicates = declared - operations.len(),
            "parsed service description"
        );
        self.events.on_event(SyncEvent::Parsed {
            url: url.to_string(),
            operation_count: operations.len(),
        });
        Ok(operations)
    }

    fn to_operation(&self, parsed: ParsedOperation) -> Operation {
        Operation {
            code: parsed.code,
            version: parsed.version,
            title: parsed.title,
            url: parsed.url,
            timeout: self.options.default_timeout,
        }
    }

    fn ensure_no_conflicts(
        &self,
        client: &Client,
        candidates: &[Operation],
        scope: ConflictScope,
        url: &str,
    ) -> SyncResult<()> {
        let conflicts = self.conflict_detector.detect(client, candidates, scope);
        if conflicts.is_empty() {
            return Ok(());
        }

        debug!(url, conflicts = conflicts.len(), "operations already exist");
        self.events.on_event(SyncEvent::ConflictsDetected {
            url: url.to_string(),
            conflict_count: conflicts.len(),
        });
        Err(SyncError::OperationExists { conflicts })
    }

    fn validation_warnings(&self, url: &str) -> SyncResult<Vec<Warning>> {
        let messages = self.validator.validate(url).map_err(|err| {
            error!(url, code = %err.code, "description validation failed: {}", err.message);
            SyncError::WsdlValidationFailed {
                code: err.code,
                message: err.message,
                warnings: err.warnings,
            }
        })?;

        if messages.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![Warning::validation(messages)])
        }
    }

    fn changes_against(
        &self,
        client: &Client,
        id: DescriptionId,
        candidates: &[Operation],
    ) -> SyncResult<ChangeSet> {
        let current = client
            .description(id)
            .ok_or_else(|| description_not_found(id))?;
        Ok(self.change_checker.check(current.operations(), candidates))
    }

    /// Either accept every warning or reject the whole call.
    fn gate_warnings(
        &self,
        url: &str,
        warnings: Vec<Warning>,
        ignore_warnings: bool,
    ) -> SyncResult<Vec<Warning>> {
        if warnings.is_empty() {
            return Ok(warnings);
        }

        self.events.on_event(SyncEvent::WarningsCollected {
            url: url.to_string(),
            warning_count: warnings.len(),
        });
        if ignore_warnings {
            debug!(url, warnings = warnings.len(), "warnings ignored by caller");
            Ok(warnings)
        } else {
            Err(SyncError::WarningsDetected { warnings })
        }
    }

    fn committed(&self, action: SyncAction, description: &ServiceDescription, changes: &ChangeSet) {
        info!(
            action = action.as_str(),
            client = %description.client_id,
            id = %description.id,
            url = %description.url,
            changes = %changes.summary(),
            "committed service description"
        );
        self.events.on_event(SyncEvent::Committed {
            action,
            client_id: description.client_id.clone(),
            description_id: description.id,
            added: changes.added.len(),
            removed: changes.removed.len(),
        });
    }

    fn report(
        &self,
        action: SyncAction,
        url: &str,
        result: SyncResult<SyncOutcome>,
    ) -> SyncResult<SyncOutcome> {
        if let Err(err) = &result {
            warn!(action = action.as_str(), url, code = err.code(), "rejected: {}", err);
            self.events.on_event(SyncEvent::Rejected {
                action,
                url: url.to_string(),
                code: err.code().to_string(),
            });
        }
        result
    }
}

fn ensure_valid_url(url: &str) -> SyncResult<()> {
    if is_valid_source_url(url) {
        Ok(())
    } else {
        Err(SyncError::MalformedUrl {
            url: url.to_string(),
        })
    }
}

fn description_not_found(id: DescriptionId) -> SyncError {
    SyncError::DescriptionsNotFound { ids: vec![id] }
}
